use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema, FromRow)]
pub struct RecentBooking {
    pub id: Uuid,
    pub user_name: String,
    pub theatre_id: Uuid,
    pub movie_id: Uuid,
    pub showtime_id: Uuid,
    #[sqlx(json)]
    pub seats_selected: Vec<String>,
    pub total_price: i64,
    pub booking_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema, FromRow)]
pub struct DailyBookings {
    pub date: NaiveDate,
    pub bookings_count: i64,
    pub revenue: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingStats {
    pub total_bookings: i64,
    pub total_revenue: i64,
    pub recent: Vec<RecentBooking>,
    pub daily: Vec<DailyBookings>,
}
