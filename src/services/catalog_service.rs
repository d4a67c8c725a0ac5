use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    dto::catalog::{MovieList, SeatMap, SeatSection, SeatStatus, ShowtimeList, TheatreList},
    entity::{
        movies::{self, Column as MovieCol, Entity as Movies},
        seats::{Column as SeatCol, Entity as Seats},
        showtimes::{self, Column as ShowtimeCol, Entity as Showtimes},
        theatres::{self, Column as TheatreCol, Entity as Theatres},
    },
    error::{AppError, AppResult},
    models::{Movie, Showtime, Theatre},
    pricing::{SeatType, compare_seat_numbers},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_theatres(state: &AppState) -> AppResult<ApiResponse<TheatreList>> {
    let items: Vec<Theatre> = Theatres::find()
        .order_by_asc(TheatreCol::Name)
        .all(state.orm.as_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let meta = Meta::unpaged(items.len());
    Ok(ApiResponse::success("Theatres", TheatreList { items }, Some(meta)))
}

pub async fn list_movies(state: &AppState, theatre_id: Uuid) -> AppResult<ApiResponse<MovieList>> {
    find_theatre(state, theatre_id).await?;

    let items: Vec<Movie> = Movies::find()
        .filter(MovieCol::TheatreId.eq(theatre_id))
        .order_by_asc(MovieCol::Name)
        .all(state.orm.as_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let meta = Meta::unpaged(items.len());
    Ok(ApiResponse::success("Movies", MovieList { items }, Some(meta)))
}

pub async fn list_showtimes(
    state: &AppState,
    movie_id: Uuid,
) -> AppResult<ApiResponse<ShowtimeList>> {
    find_movie(state, movie_id).await?;

    let items: Vec<Showtime> = Showtimes::find()
        .filter(ShowtimeCol::MovieId.eq(movie_id))
        .order_by_asc(ShowtimeCol::Showtime)
        .all(state.orm.as_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let meta = Meta::unpaged(items.len());
    Ok(ApiResponse::success("Showtimes", ShowtimeList { items }, Some(meta)))
}

pub async fn seat_map(state: &AppState, showtime_id: Uuid) -> AppResult<ApiResponse<SeatMap>> {
    let showtime = find_showtime(state, showtime_id).await?;

    let seats = Seats::find()
        .filter(SeatCol::ShowtimeId.eq(showtime_id))
        .all(state.orm.as_ref())
        .await?;

    let booked = seats.iter().filter(|s| s.booked).count();
    let free = seats.len() - booked;

    let sections = SeatType::ALL
        .iter()
        .map(|&seat_type| {
            let mut seats: Vec<SeatStatus> = seats
                .iter()
                .filter(|s| s.seat_type == seat_type.as_str())
                .map(|s| SeatStatus {
                    seat_number: s.seat_number.clone(),
                    booked: s.booked,
                })
                .collect();
            seats.sort_by(|a, b| compare_seat_numbers(&a.seat_number, &b.seat_number));
            SeatSection {
                seat_type,
                price: seat_type.price(),
                seats,
            }
        })
        .filter(|section| !section.seats.is_empty())
        .collect();

    let data = SeatMap {
        showtime: showtime.into(),
        sections,
        free,
        booked,
    };
    Ok(ApiResponse::success("Seats", data, Some(Meta::empty())))
}

pub(crate) async fn find_theatre(state: &AppState, id: Uuid) -> AppResult<theatres::Model> {
    Theatres::find_by_id(id)
        .one(state.orm.as_ref())
        .await?
        .ok_or(AppError::NotFound)
}

pub(crate) async fn find_movie(state: &AppState, id: Uuid) -> AppResult<movies::Model> {
    Movies::find_by_id(id)
        .one(state.orm.as_ref())
        .await?
        .ok_or(AppError::NotFound)
}

pub(crate) async fn find_showtime(state: &AppState, id: Uuid) -> AppResult<showtimes::Model> {
    Showtimes::find_by_id(id)
        .one(state.orm.as_ref())
        .await?
        .ok_or(AppError::NotFound)
}
