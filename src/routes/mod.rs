use axum::{Router, routing::get};

use crate::state::AppState;

pub mod admin;
pub mod bookings;
pub mod catalog;
pub mod doc;
pub mod health;
pub mod params;
pub mod reviews;
pub mod stats;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(reviews::router())
        .route("/stats", get(stats::booking_stats))
        .nest("/bookings", bookings::router())
        .nest("/admin", admin::router())
}
