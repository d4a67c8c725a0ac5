use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::catalog::{MovieList, SeatMap, ShowtimeList, TheatreList},
    error::AppResult,
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/theatres", get(list_theatres))
        .route("/theatres/{id}/movies", get(list_movies))
        .route("/movies/{id}/showtimes", get(list_showtimes))
        .route("/showtimes/{id}/seats", get(seat_map))
}

#[utoipa::path(
    get,
    path = "/api/theatres",
    responses(
        (status = 200, description = "List theatres", body = ApiResponse<TheatreList>)
    ),
    tag = "Catalog"
)]
pub async fn list_theatres(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<TheatreList>>> {
    let resp = catalog_service::list_theatres(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/theatres/{id}/movies",
    params(
        ("id" = Uuid, Path, description = "Theatre ID")
    ),
    responses(
        (status = 200, description = "Movies playing at a theatre", body = ApiResponse<MovieList>),
        (status = 404, description = "Theatre not found"),
    ),
    tag = "Catalog"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<MovieList>>> {
    let resp = catalog_service::list_movies(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}/showtimes",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Showtimes of a movie, earliest first", body = ApiResponse<ShowtimeList>),
        (status = 404, description = "Movie not found"),
    ),
    tag = "Catalog"
)]
pub async fn list_showtimes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ShowtimeList>>> {
    let resp = catalog_service::list_showtimes(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/showtimes/{id}/seats",
    params(
        ("id" = Uuid, Path, description = "Showtime ID")
    ),
    responses(
        (status = 200, description = "Seat map grouped by seat type", body = ApiResponse<SeatMap>),
        (status = 404, description = "Showtime not found"),
    ),
    tag = "Catalog"
)]
pub async fn seat_map(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<SeatMap>>> {
    let resp = catalog_service::seat_map(&state, id).await?;
    Ok(Json(resp))
}
