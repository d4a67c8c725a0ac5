use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    /// Meta for a list returned in full, without paging.
    pub fn unpaged(count: usize) -> Self {
        let count = count as i64;
        Self::new(1, count, count)
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

/// Envelope for every JSON body the API returns, errors included.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaged_meta_reports_one_full_page() {
        let meta = Meta::unpaged(7);
        assert_eq!(meta.page, Some(1));
        assert_eq!(meta.per_page, Some(7));
        assert_eq!(meta.total, Some(7));
    }

    #[test]
    fn success_envelope_serializes_message_and_data() {
        let body = ApiResponse::success("Seats", vec!["S1"], None);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Seats");
        assert_eq!(json["data"][0], "S1");
        assert!(json["meta"].is_null());
    }
}
