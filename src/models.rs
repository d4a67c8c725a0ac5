use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{bookings, movies, reviews, seats, showtimes, theatres};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Theatre {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub theatre_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Showtime {
    pub id: Uuid,
    pub movie_id: Uuid,
    #[schema(value_type = String, example = "18:30:00")]
    pub showtime: NaiveTime,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Seat {
    pub id: Uuid,
    pub showtime_id: Uuid,
    pub seat_number: String,
    pub seat_type: String,
    pub booked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub theatre_id: Uuid,
    pub movie_id: Uuid,
    pub showtime_id: Uuid,
    pub seats_selected: Vec<String>,
    pub total_price: i64,
    pub booking_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_name: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub review_time: DateTime<Utc>,
}

impl From<theatres::Model> for Theatre {
    fn from(model: theatres::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<movies::Model> for Movie {
    fn from(model: movies::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            theatre_id: model.theatre_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<showtimes::Model> for Showtime {
    fn from(model: showtimes::Model) -> Self {
        Self {
            id: model.id,
            movie_id: model.movie_id,
            showtime: model.showtime,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<seats::Model> for Seat {
    fn from(model: seats::Model) -> Self {
        Self {
            id: model.id,
            showtime_id: model.showtime_id,
            seat_number: model.seat_number,
            seat_type: model.seat_type,
            booked: model.booked,
        }
    }
}

impl From<bookings::Model> for Booking {
    fn from(model: bookings::Model) -> Self {
        // Rows written by this service always hold a JSON array of strings.
        let seats_selected = serde_json::from_value(model.seats_selected).unwrap_or_default();
        Self {
            id: model.id,
            user_name: model.user_name,
            email: model.email,
            phone: model.phone,
            theatre_id: model.theatre_id,
            movie_id: model.movie_id,
            showtime_id: model.showtime_id,
            seats_selected,
            total_price: model.total_price,
            booking_time: model.booking_time.with_timezone(&Utc),
        }
    }
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            movie_id: model.movie_id,
            user_name: model.user_name,
            rating: model.rating,
            comment: model.comment,
            review_time: model.review_time.with_timezone(&Utc),
        }
    }
}
