use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        admin::{
            AdminLoginRequest, AdminLoginResponse, CreateMovieRequest, CreateShowtimeRequest,
            CreateTheatreRequest,
        },
        bookings::BookingList,
    },
    error::AppResult,
    middleware::auth::AdminUser,
    models::{Movie, Showtime, Theatre},
    response::ApiResponse,
    routes::params::BookingListQuery,
    services::{admin_service, booking_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/theatres", post(create_theatre))
        .route("/theatres/{id}", delete(delete_theatre))
        .route("/movies", post(create_movie))
        .route("/movies/{id}", delete(delete_movie))
        .route("/showtimes", post(create_showtime))
        .route("/showtimes/{id}", delete(delete_showtime))
        .route("/bookings", get(list_bookings))
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Admin token", body = ApiResponse<AdminLoginResponse>),
        (status = 400, description = "Invalid admin password"),
    ),
    tag = "Admin"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginRequest>,
) -> AppResult<Json<ApiResponse<AdminLoginResponse>>> {
    let resp = admin_service::login(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/theatres",
    request_body = CreateTheatreRequest,
    responses(
        (status = 201, description = "Theatre created", body = ApiResponse<Theatre>),
        (status = 400, description = "Blank name or missing token"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_theatre(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<CreateTheatreRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Theatre>>)> {
    let resp = admin_service::create_theatre(&state, &admin, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/theatres/{id}",
    params(
        ("id" = Uuid, Path, description = "Theatre ID")
    ),
    responses(
        (status = 200, description = "Theatre deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Theatre still has movies"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_theatre(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = admin_service::delete_theatre(&state, &admin, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = ApiResponse<Movie>),
        (status = 400, description = "Blank name"),
        (status = 404, description = "Theatre not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Movie>>)> {
    let resp = admin_service::create_movie(&state, &admin, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Movie still has showtimes"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = admin_service::delete_movie(&state, &admin, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/showtimes",
    request_body = CreateShowtimeRequest,
    responses(
        (status = 201, description = "Showtime created with its seats", body = ApiResponse<Showtime>),
        (status = 400, description = "Unparsable showtime"),
        (status = 404, description = "Movie not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_showtime(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<CreateShowtimeRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Showtime>>)> {
    let resp = admin_service::create_showtime(&state, &admin, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/showtimes/{id}",
    params(
        ("id" = Uuid, Path, description = "Showtime ID")
    ),
    responses(
        (status = 200, description = "Showtime and its seats deleted"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_showtime(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = admin_service::delete_showtime(&state, &admin, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("showtime_id" = Option<Uuid>, Query, description = "Filter by showtime"),
        ("sort_order" = Option<String>, Query, description = "Sort order: asc, desc")
    ),
    responses(
        (status = 200, description = "All bookings (admin only)", body = ApiResponse<BookingList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<BookingListQuery>,
) -> AppResult<Json<ApiResponse<BookingList>>> {
    let resp = booking_service::list_bookings(&state, query).await?;
    Ok(Json(resp))
}
