use axum::{Json, extract::State};

use crate::{
    dto::stats::BookingStats, error::AppResult, response::ApiResponse,
    services::stats_service, state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Booking totals, recent bookings and daily revenue", body = ApiResponse<BookingStats>)
    ),
    tag = "Statistics"
)]
pub async fn booking_stats(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BookingStats>>> {
    let resp = stats_service::booking_stats(&state).await?;
    Ok(Json(resp))
}
