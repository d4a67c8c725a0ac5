use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::{self, ACTOR_CUSTOMER},
    dto::bookings::{BookingCreated, BookingList, ClaimPolicy, CreateBookingRequest, NewBooking},
    entity::{
        bookings::{ActiveModel as BookingActive, Column as BookingCol, Entity as Bookings},
        movies::Entity as Movies,
        seats::{Column as SeatCol, Entity as Seats},
        showtimes::Entity as Showtimes,
        theatres::Entity as Theatres,
    },
    error::{AppError, AppResult},
    models::Booking,
    pricing,
    receipt::{self, Receipt},
    response::{ApiResponse, Meta},
    routes::params::{BookingListQuery, SortOrder},
    services::catalog_service::{find_movie, find_showtime, find_theatre},
    state::AppState,
};

const REMOVED: &str = "(removed)";

pub async fn create_booking(
    state: &AppState,
    payload: CreateBookingRequest,
) -> AppResult<ApiResponse<BookingCreated>> {
    let request = payload.validate(
        state.booking.max_seats_per_booking,
        state.booking.claim_policy,
    )?;

    let showtime = find_showtime(state, request.showtime_id).await?;
    let movie = find_movie(state, showtime.movie_id).await?;
    let theatre = find_theatre(state, movie.theatre_id).await?;

    let txn = state.orm.begin().await?;

    let mut claimed: Vec<(String, String)> = Vec::with_capacity(request.seats.len());
    let mut unavailable: Vec<String> = Vec::new();
    for seat_number in claim_order(&request.seats) {
        // Conditional claim: only a free seat matches, so two racing requests
        // cannot both flip the same row.
        let rows = Seats::update_many()
            .col_expr(SeatCol::Booked, Expr::value(true))
            .filter(SeatCol::ShowtimeId.eq(showtime.id))
            .filter(SeatCol::SeatNumber.eq(seat_number.as_str()))
            .filter(SeatCol::Booked.eq(false))
            .exec_with_returning(&txn)
            .await?;

        match rows.as_slice() {
            [seat] => claimed.push((seat.seat_number.clone(), seat.seat_type.clone())),
            _ => unavailable.push(seat_number.clone()),
        }
    }

    if let Some(reason) = claim_failure(&request, &claimed, &unavailable) {
        txn.rollback().await?;
        tracing::info!(
            showtime_id = %showtime.id,
            unavailable = ?unavailable,
            policy = ?request.policy,
            "seat claim rejected"
        );
        return Err(AppError::Conflict(reason));
    }

    let seat_numbers: Vec<String> = claimed.iter().map(|(n, _)| n.clone()).collect();
    let total_price = pricing::total_price(claimed.iter().map(|(_, t)| t.as_str()));

    let booking = BookingActive {
        id: Set(Uuid::new_v4()),
        user_name: Set(request.user_name.clone()),
        email: Set(request.email.clone()),
        phone: Set(request.phone.clone()),
        theatre_id: Set(theatre.id),
        movie_id: Set(movie.id),
        showtime_id: Set(showtime.id),
        seats_selected: Set(serde_json::json!(seat_numbers)),
        total_price: Set(total_price),
        booking_time: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!(
        booking_id = %booking.id,
        showtime_id = %showtime.id,
        seats = ?seat_numbers,
        total_price,
        "booking confirmed"
    );

    audit::record(
        &state.pool,
        ACTOR_CUSTOMER,
        "booking_create",
        "bookings",
        serde_json::json!({
            "booking_id": booking.id,
            "showtime_id": showtime.id,
            "seats": seat_numbers,
            "unavailable": unavailable,
        }),
    )
    .await;

    let booking: Booking = booking.into();
    let receipt_url = receipt_url(booking.id);
    Ok(ApiResponse::success(
        format!("Booking Confirmed! Seats: {}", booking.seats_selected.join(", ")),
        BookingCreated {
            booking,
            unavailable_seats: unavailable,
            receipt_url,
        },
        Some(Meta::empty()),
    ))
}

/// Seats in the order their row locks are taken. Every request locks in the
/// same natural order, so overlapping requests wait on each other instead of
/// deadlocking.
fn claim_order(seats: &[String]) -> Vec<&String> {
    let mut ordered: Vec<&String> = seats.iter().collect();
    ordered.sort_by(|a, b| pricing::compare_seat_numbers(a, b));
    ordered
}

/// Why a claim round cannot be committed under the request's policy, if at all.
fn claim_failure(
    request: &NewBooking,
    claimed: &[(String, String)],
    unavailable: &[String],
) -> Option<String> {
    if claimed.is_empty() {
        return Some("Selected seats already booked".to_string());
    }
    if request.policy == ClaimPolicy::AllOrNothing && !unavailable.is_empty() {
        return Some(format!("Seats not available: {}", unavailable.join(", ")));
    }
    None
}

pub fn receipt_url(booking_id: Uuid) -> String {
    format!("/api/bookings/{booking_id}/receipt")
}

pub async fn get_booking(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Booking>> {
    let booking = Bookings::find_by_id(id)
        .one(state.orm.as_ref())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Booking", booking.into(), Some(Meta::empty())))
}

/// PDF receipt for a stored booking, with the download file name.
pub async fn booking_receipt(state: &AppState, id: Uuid) -> AppResult<(String, Vec<u8>)> {
    let booking: Booking = Bookings::find_by_id(id)
        .one(state.orm.as_ref())
        .await?
        .ok_or(AppError::NotFound)?
        .into();

    // Catalog rows may have been deleted since the booking was made.
    let theatre = Theatres::find_by_id(booking.theatre_id)
        .one(state.orm.as_ref())
        .await?
        .map(|t| t.name);
    let movie = Movies::find_by_id(booking.movie_id)
        .one(state.orm.as_ref())
        .await?
        .map(|m| m.name);
    let showtime = Showtimes::find_by_id(booking.showtime_id)
        .one(state.orm.as_ref())
        .await?
        .map(|s| s.showtime.format("%H:%M:%S").to_string());

    let file_name = receipt::receipt_file_name(&booking.user_name);
    let receipt = Receipt {
        user_name: booking.user_name,
        email: booking.email,
        phone: booking.phone,
        theatre: theatre.unwrap_or_else(|| REMOVED.to_string()),
        movie: movie.unwrap_or_else(|| REMOVED.to_string()),
        showtime: showtime.unwrap_or_else(|| REMOVED.to_string()),
        seats: booking.seats_selected,
        total_price: booking.total_price,
        booking_time: booking.booking_time.format("%Y-%m-%d %H:%M UTC").to_string(),
    };

    let bytes = receipt::render_pdf(&receipt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
    Ok((file_name, bytes))
}

pub async fn list_bookings(
    state: &AppState,
    query: BookingListQuery,
) -> AppResult<ApiResponse<BookingList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut finder = Bookings::find();
    if let Some(showtime_id) = query.showtime_id {
        finder = finder.filter(BookingCol::ShowtimeId.eq(showtime_id));
    }
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder.order_by_asc(BookingCol::BookingTime),
        SortOrder::Desc => finder.order_by_desc(BookingCol::BookingTime),
    };

    let total = finder.clone().count(state.orm.as_ref()).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.orm.as_ref())
        .await?
        .into_iter()
        .map(Booking::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Bookings", BookingList { items }, Some(meta)))
}
