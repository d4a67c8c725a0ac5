use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Review,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub user_name: String,
    pub rating: i16,
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.user_name.trim().is_empty() {
            return Err(AppError::BadRequest("user_name is required".into()));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::BadRequest("rating must be between 1 and 5".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewList {
    pub items: Vec<Review>,
    pub average_rating: Option<f64>,
    pub review_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_name: &str, rating: i16) -> CreateReviewRequest {
        CreateReviewRequest {
            user_name: user_name.into(),
            rating,
            comment: None,
        }
    }

    #[test]
    fn rating_must_be_one_to_five() {
        assert!(request("Ravi", 1).validate().is_ok());
        assert!(request("Ravi", 5).validate().is_ok());
        assert!(request("Ravi", 0).validate().is_err());
        assert!(request("Ravi", 6).validate().is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            request("  ", 3).validate(),
            Err(AppError::BadRequest(_))
        ));
    }
}
