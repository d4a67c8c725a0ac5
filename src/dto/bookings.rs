use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Booking,
};

/// What to do when some requested seats were taken by someone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPolicy {
    /// Book whatever is still free; fail only when nothing could be claimed.
    BestEffort,
    /// Fail and roll back unless every requested seat is claimed.
    AllOrNothing,
}

impl ClaimPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "best_effort" => Some(ClaimPolicy::BestEffort),
            "all_or_nothing" => Some(ClaimPolicy::AllOrNothing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub showtime_id: Uuid,
    pub seats: Vec<String>,
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub policy: Option<ClaimPolicy>,
}

/// A booking request that passed validation, with trimmed contact fields and
/// de-duplicated seats.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub showtime_id: Uuid,
    pub seats: Vec<String>,
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub policy: ClaimPolicy,
}

impl CreateBookingRequest {
    pub fn validate(self, max_seats: usize, default_policy: ClaimPolicy) -> AppResult<NewBooking> {
        let mut seats: Vec<String> = Vec::with_capacity(self.seats.len());
        for seat in self.seats {
            let seat = seat.trim().to_string();
            if seat.is_empty() {
                return Err(AppError::BadRequest("seat numbers must not be blank".into()));
            }
            if !seats.contains(&seat) {
                seats.push(seat);
            }
        }

        if seats.is_empty() {
            return Err(AppError::BadRequest("Select at least 1 seat".into()));
        }
        if seats.len() > max_seats {
            return Err(AppError::BadRequest(format!(
                "At most {max_seats} seats per booking"
            )));
        }

        let user_name = self.user_name.trim().to_string();
        let email = self.email.trim().to_string();
        let phone = self.phone.trim().to_string();
        if user_name.is_empty() || email.is_empty() || phone.is_empty() {
            return Err(AppError::BadRequest("Fill all fields".into()));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("email is invalid".into()));
        }
        if phone.chars().count() > 15 {
            return Err(AppError::BadRequest("phone is too long".into()));
        }
        if user_name.chars().count() > 100 || email.chars().count() > 100 {
            return Err(AppError::BadRequest("name or email is too long".into()));
        }

        Ok(NewBooking {
            showtime_id: self.showtime_id,
            seats,
            user_name,
            email,
            phone,
            policy: self.policy.unwrap_or(default_policy),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingCreated {
    pub booking: Booking,
    /// Requested seats that were already booked and left out.
    pub unavailable_seats: Vec<String>,
    pub receipt_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BookingList {
    #[schema(value_type = Vec<Booking>)]
    pub items: Vec<Booking>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seats: &[&str]) -> CreateBookingRequest {
        CreateBookingRequest {
            showtime_id: Uuid::new_v4(),
            seats: seats.iter().map(|s| s.to_string()).collect(),
            user_name: "  Meera Iyer ".into(),
            email: "meera@example.com".into(),
            phone: "9000000001".into(),
            policy: None,
        }
    }

    #[test]
    fn duplicates_collapse_in_request_order() {
        let booking = request(&["S3", "S1", "S3", " S1 "])
            .validate(10, ClaimPolicy::BestEffort)
            .unwrap();
        assert_eq!(booking.seats, vec!["S3", "S1"]);
        assert_eq!(booking.user_name, "Meera Iyer");
        assert_eq!(booking.policy, ClaimPolicy::BestEffort);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let err = request(&[]).validate(10, ClaimPolicy::BestEffort).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn seat_cap_counts_distinct_seats() {
        let eleven: Vec<String> = (1..=11).map(|n| format!("S{n}")).collect();
        let refs: Vec<&str> = eleven.iter().map(String::as_str).collect();
        assert!(request(&refs).validate(10, ClaimPolicy::BestEffort).is_err());

        let mut ten = refs[..10].to_vec();
        ten.push("S1");
        assert!(request(&ten).validate(10, ClaimPolicy::BestEffort).is_ok());
    }

    #[test]
    fn contact_fields_are_required() {
        let mut req = request(&["S1"]);
        req.phone = "   ".into();
        assert!(req.validate(10, ClaimPolicy::BestEffort).is_err());

        let mut req = request(&["S1"]);
        req.email = "not-an-email".into();
        assert!(req.validate(10, ClaimPolicy::BestEffort).is_err());

        let mut req = request(&["S1"]);
        req.phone = "+91 98765 43210 99".into();
        assert!(req.validate(10, ClaimPolicy::BestEffort).is_err());
    }

    #[test]
    fn explicit_policy_overrides_default() {
        let mut req = request(&["S1"]);
        req.policy = Some(ClaimPolicy::AllOrNothing);
        let booking = req.validate(10, ClaimPolicy::BestEffort).unwrap();
        assert_eq!(booking.policy, ClaimPolicy::AllOrNothing);
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!(ClaimPolicy::parse("best_effort"), Some(ClaimPolicy::BestEffort));
        assert_eq!(ClaimPolicy::parse(" ALL_OR_NOTHING "), Some(ClaimPolicy::AllOrNothing));
        assert_eq!(ClaimPolicy::parse("partial"), None);
    }
}
