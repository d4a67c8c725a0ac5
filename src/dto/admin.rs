use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Deserialize, Debug, ToSchema)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub token: String,
    pub expires_at: i64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTheatreRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    pub name: String,
    pub theatre_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShowtimeRequest {
    pub movie_id: Uuid,
    /// Time of day, `HH:MM:SS` or `HH:MM`.
    #[schema(example = "16:00:00")]
    pub showtime: String,
}

/// Trimmed, non-empty catalog name of at most 100 characters.
pub fn catalog_name(raw: &str, field: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    if name.chars().count() > 100 {
        return Err(AppError::BadRequest(format!("{field} is too long")));
    }
    Ok(name.to_string())
}

pub fn parse_showtime(raw: &str) -> AppResult<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| AppError::BadRequest("showtime must be HH:MM:SS or HH:MM".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showtime_accepts_both_formats() {
        assert_eq!(
            parse_showtime("16:00:00").unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap()
        );
        assert_eq!(
            parse_showtime(" 09:45 ").unwrap(),
            NaiveTime::from_hms_opt(9, 45, 0).unwrap()
        );
    }

    #[test]
    fn showtime_rejects_garbage() {
        assert!(parse_showtime("25:00").is_err());
        assert!(parse_showtime("evening").is_err());
        assert!(parse_showtime("").is_err());
    }

    #[test]
    fn catalog_name_is_trimmed_and_required() {
        assert_eq!(catalog_name("  INOX  ", "name").unwrap(), "INOX");
        assert!(catalog_name("   ", "name").is_err());
        assert!(catalog_name(&"x".repeat(101), "name").is_err());
    }
}
