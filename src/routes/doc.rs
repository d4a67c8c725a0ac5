use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{
            AdminLoginRequest, AdminLoginResponse, CreateMovieRequest, CreateShowtimeRequest,
            CreateTheatreRequest,
        },
        bookings::{BookingCreated, BookingList, ClaimPolicy, CreateBookingRequest},
        catalog::{MovieList, SeatMap, SeatSection, SeatStatus, ShowtimeList, TheatreList},
        reviews::{CreateReviewRequest, ReviewList},
        stats::{BookingStats, DailyBookings, RecentBooking},
    },
    models::{Booking, Movie, Review, Seat, Showtime, Theatre},
    pricing::SeatType,
    response::{ApiResponse, Meta},
    routes::{admin, bookings, catalog, health, params, reviews, stats},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::list_theatres,
        catalog::list_movies,
        catalog::list_showtimes,
        catalog::seat_map,
        bookings::create_booking,
        bookings::get_booking,
        bookings::download_receipt,
        reviews::list_reviews,
        reviews::create_review,
        stats::booking_stats,
        admin::login,
        admin::create_theatre,
        admin::delete_theatre,
        admin::create_movie,
        admin::delete_movie,
        admin::create_showtime,
        admin::delete_showtime,
        admin::list_bookings
    ),
    components(
        schemas(
            Theatre,
            Movie,
            Showtime,
            Seat,
            Booking,
            Review,
            SeatType,
            SeatStatus,
            SeatSection,
            SeatMap,
            TheatreList,
            MovieList,
            ShowtimeList,
            ClaimPolicy,
            CreateBookingRequest,
            BookingCreated,
            BookingList,
            CreateReviewRequest,
            ReviewList,
            RecentBooking,
            DailyBookings,
            BookingStats,
            AdminLoginRequest,
            AdminLoginResponse,
            CreateTheatreRequest,
            CreateMovieRequest,
            CreateShowtimeRequest,
            params::Pagination,
            params::SortOrder,
            params::BookingListQuery,
            Meta,
            ApiResponse<SeatMap>,
            ApiResponse<BookingCreated>,
            ApiResponse<BookingList>,
            ApiResponse<ReviewList>,
            ApiResponse<BookingStats>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Theatres, movies, showtimes and seat maps"),
        (name = "Bookings", description = "Seat booking and receipts"),
        (name = "Reviews", description = "Movie reviews"),
        (name = "Statistics", description = "Booking statistics"),
        (name = "Admin", description = "Password-gated catalog management"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
