use crate::{
    dto::stats::{BookingStats, DailyBookings, RecentBooking},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

const RECENT_LIMIT: i64 = 10;
const DAILY_LIMIT: i64 = 10;

pub async fn booking_stats(state: &AppState) -> AppResult<ApiResponse<BookingStats>> {
    let (total_bookings, total_revenue): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*)::BIGINT, COALESCE(SUM(total_price), 0)::BIGINT FROM bookings",
    )
    .fetch_one(&state.pool)
    .await?;

    let recent = sqlx::query_as::<_, RecentBooking>(
        r#"
        SELECT id, user_name, theatre_id, movie_id, showtime_id,
               seats_selected, total_price, booking_time
        FROM bookings
        ORDER BY booking_time DESC
        LIMIT $1
        "#,
    )
    .bind(RECENT_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    let daily = sqlx::query_as::<_, DailyBookings>(
        r#"
        SELECT DATE(booking_time) AS date,
               COUNT(*)::BIGINT AS bookings_count,
               COALESCE(SUM(total_price), 0)::BIGINT AS revenue
        FROM bookings
        GROUP BY DATE(booking_time)
        ORDER BY date DESC
        LIMIT $1
        "#,
    )
    .bind(DAILY_LIMIT)
    .fetch_all(&state.pool)
    .await?;

    let data = BookingStats {
        total_bookings,
        total_revenue,
        recent,
        daily,
    };
    Ok(ApiResponse::success("Booking statistics", data, Some(Meta::empty())))
}
