pub mod admin;
pub mod bookings;
pub mod catalog;
pub mod reviews;
pub mod stats;
