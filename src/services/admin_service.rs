use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::{
    audit::{self, ACTOR_ADMIN},
    dto::admin::{
        AdminLoginRequest, AdminLoginResponse, CreateMovieRequest, CreateShowtimeRequest,
        CreateTheatreRequest, catalog_name, parse_showtime,
    },
    entity::{
        movies::{ActiveModel as MovieActive, Column as MovieCol, Entity as Movies},
        seats::{ActiveModel as SeatActive, Column as SeatCol, Entity as Seats},
        showtimes::{ActiveModel as ShowtimeActive, Column as ShowtimeCol, Entity as Showtimes},
        theatres::{ActiveModel as TheatreActive, Entity as Theatres},
    },
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    models::{Movie, Showtime, Theatre},
    pricing::seat_layout,
    response::{ApiResponse, Meta},
    services::catalog_service::{find_movie, find_showtime, find_theatre},
    state::AppState,
};

pub async fn login(
    state: &AppState,
    payload: AdminLoginRequest,
) -> AppResult<ApiResponse<AdminLoginResponse>> {
    if !state.admin.verify_password(&payload.password) {
        tracing::warn!("admin login rejected");
        return Err(AppError::BadRequest("Invalid admin password".into()));
    }

    let (token, expires_at) = state.admin.issue_token()?;

    audit::record(
        &state.pool,
        ACTOR_ADMIN,
        "admin_login",
        "admin",
        serde_json::json!({ "expires_at": expires_at }),
    )
    .await;

    Ok(ApiResponse::success(
        "Logged in",
        AdminLoginResponse {
            token: format!("Bearer {}", token),
            expires_at,
        },
        Some(Meta::empty()),
    ))
}

pub async fn create_theatre(
    state: &AppState,
    admin: &AdminUser,
    payload: CreateTheatreRequest,
) -> AppResult<ApiResponse<Theatre>> {
    let name = catalog_name(&payload.name, "name")?;

    let theatre = TheatreActive {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        created_at: Set(Utc::now().into()),
    }
    .insert(state.orm.as_ref())
    .await?;

    tracing::info!(theatre_id = %theatre.id, admin = %admin.subject, "theatre created");
    audit::record(
        &state.pool,
        ACTOR_ADMIN,
        "theatre_create",
        "theatres",
        serde_json::json!({ "theatre_id": theatre.id, "name": theatre.name }),
    )
    .await;

    Ok(ApiResponse::success(
        "Theatre created",
        theatre.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_theatre(
    state: &AppState,
    admin: &AdminUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let theatre = find_theatre(state, id).await?;

    let movies = Movies::find()
        .filter(MovieCol::TheatreId.eq(theatre.id))
        .count(state.orm.as_ref())
        .await?;
    if movies > 0 {
        return Err(AppError::Conflict(format!(
            "Theatre still has {movies} movie(s)"
        )));
    }

    Theatres::delete_by_id(theatre.id).exec(state.orm.as_ref()).await?;

    tracing::info!(theatre_id = %theatre.id, admin = %admin.subject, "theatre deleted");
    audit::record(
        &state.pool,
        ACTOR_ADMIN,
        "theatre_delete",
        "theatres",
        serde_json::json!({ "theatre_id": theatre.id, "name": theatre.name }),
    )
    .await;

    Ok(ApiResponse::success(
        "Theatre deleted",
        serde_json::json!({ "id": theatre.id }),
        Some(Meta::empty()),
    ))
}

pub async fn create_movie(
    state: &AppState,
    admin: &AdminUser,
    payload: CreateMovieRequest,
) -> AppResult<ApiResponse<Movie>> {
    let name = catalog_name(&payload.name, "name")?;
    let theatre = find_theatre(state, payload.theatre_id).await?;

    let movie = MovieActive {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        theatre_id: Set(theatre.id),
        created_at: Set(Utc::now().into()),
    }
    .insert(state.orm.as_ref())
    .await?;

    tracing::info!(movie_id = %movie.id, theatre_id = %theatre.id, admin = %admin.subject, "movie created");
    audit::record(
        &state.pool,
        ACTOR_ADMIN,
        "movie_create",
        "movies",
        serde_json::json!({ "movie_id": movie.id, "theatre_id": theatre.id, "name": movie.name }),
    )
    .await;

    Ok(ApiResponse::success(
        "Movie created",
        movie.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_movie(
    state: &AppState,
    admin: &AdminUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let movie = find_movie(state, id).await?;

    let showtimes = Showtimes::find()
        .filter(ShowtimeCol::MovieId.eq(movie.id))
        .count(state.orm.as_ref())
        .await?;
    if showtimes > 0 {
        return Err(AppError::Conflict(format!(
            "Movie still has {showtimes} showtime(s)"
        )));
    }

    // Reviews go with the movie (ON DELETE CASCADE).
    Movies::delete_by_id(movie.id).exec(state.orm.as_ref()).await?;

    tracing::info!(movie_id = %movie.id, admin = %admin.subject, "movie deleted");
    audit::record(
        &state.pool,
        ACTOR_ADMIN,
        "movie_delete",
        "movies",
        serde_json::json!({ "movie_id": movie.id, "name": movie.name }),
    )
    .await;

    Ok(ApiResponse::success(
        "Movie deleted",
        serde_json::json!({ "id": movie.id }),
        Some(Meta::empty()),
    ))
}

/// Creates the showtime together with its full seat layout.
pub async fn create_showtime(
    state: &AppState,
    admin: &AdminUser,
    payload: CreateShowtimeRequest,
) -> AppResult<ApiResponse<Showtime>> {
    let time = parse_showtime(&payload.showtime)?;
    let movie = find_movie(state, payload.movie_id).await?;

    let txn = state.orm.begin().await?;

    let showtime = ShowtimeActive {
        id: Set(Uuid::new_v4()),
        movie_id: Set(movie.id),
        showtime: Set(time),
        created_at: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await?;

    let seats: Vec<SeatActive> = seat_layout()
        .into_iter()
        .map(|(seat_number, seat_type)| SeatActive {
            id: Set(Uuid::new_v4()),
            showtime_id: Set(showtime.id),
            seat_number: Set(seat_number),
            seat_type: Set(seat_type.as_str().to_string()),
            booked: Set(false),
        })
        .collect();
    let seat_count = seats.len();
    Seats::insert_many(seats).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        showtime_id = %showtime.id,
        movie_id = %movie.id,
        seats = seat_count,
        admin = %admin.subject,
        "showtime created"
    );
    audit::record(
        &state.pool,
        ACTOR_ADMIN,
        "showtime_create",
        "showtimes",
        serde_json::json!({
            "showtime_id": showtime.id,
            "movie_id": movie.id,
            "showtime": time.format("%H:%M:%S").to_string(),
        }),
    )
    .await;

    Ok(ApiResponse::success(
        "Showtime created",
        showtime.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_showtime(
    state: &AppState,
    admin: &AdminUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let showtime = find_showtime(state, id).await?;

    let txn = state.orm.begin().await?;
    let removed_seats = Seats::delete_many()
        .filter(SeatCol::ShowtimeId.eq(showtime.id))
        .exec(&txn)
        .await?
        .rows_affected;
    let result = Showtimes::delete_by_id(showtime.id).exec(&txn).await?;
    if result.rows_affected == 0 {
        txn.rollback().await?;
        return Err(AppError::NotFound);
    }
    txn.commit().await?;

    tracing::info!(
        showtime_id = %showtime.id,
        removed_seats,
        admin = %admin.subject,
        "showtime deleted"
    );
    audit::record(
        &state.pool,
        ACTOR_ADMIN,
        "showtime_delete",
        "showtimes",
        serde_json::json!({ "showtime_id": showtime.id, "removed_seats": removed_seats }),
    )
    .await;

    Ok(ApiResponse::success(
        "Showtime deleted",
        serde_json::json!({ "id": showtime.id, "removed_seats": removed_seats }),
        Some(Meta::empty()),
    ))
}
