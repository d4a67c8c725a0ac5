use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{Movie, Showtime, Theatre},
    pricing::SeatType,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TheatreList {
    #[schema(value_type = Vec<Theatre>)]
    pub items: Vec<Theatre>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MovieList {
    #[schema(value_type = Vec<Movie>)]
    pub items: Vec<Movie>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ShowtimeList {
    #[schema(value_type = Vec<Showtime>)]
    pub items: Vec<Showtime>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeatStatus {
    pub seat_number: String,
    pub booked: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeatSection {
    pub seat_type: SeatType,
    pub price: i64,
    pub seats: Vec<SeatStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeatMap {
    pub showtime: Showtime,
    pub sections: Vec<SeatSection>,
    pub free: usize,
    pub booked: usize,
}
