pub mod bookings;
pub mod movies;
pub mod reviews;
pub mod seats;
pub mod showtimes;
pub mod theatres;

pub use bookings::Entity as Bookings;
pub use movies::Entity as Movies;
pub use reviews::Entity as Reviews;
pub use seats::Entity as Seats;
pub use showtimes::Entity as Showtimes;
pub use theatres::Entity as Theatres;
