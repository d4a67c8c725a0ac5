use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use axum::{extract::FromRequestParts, http::header};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;

use crate::{dto::admin::AdminClaims, error::AppError, state::AppState};

pub const ADMIN_ROLE: &str = "admin";
const TOKEN_TTL_HOURS: i64 = 24;

/// Admin credentials held in memory: argon2 hashes of the configured
/// passwords and the token signing secret.
pub struct AdminKeys {
    password_hashes: Vec<String>,
    jwt_secret: String,
}

impl AdminKeys {
    pub fn new(passwords: &[String], jwt_secret: String) -> anyhow::Result<Self> {
        let argon2 = Argon2::default();
        let password_hashes = passwords
            .iter()
            .map(|password| {
                let salt = SaltString::generate(&mut OsRng);
                argon2
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| anyhow::anyhow!(e.to_string()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            password_hashes,
            jwt_secret,
        })
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let argon2 = Argon2::default();
        self.password_hashes.iter().any(|hash| {
            PasswordHash::new(hash)
                .map(|parsed| argon2.verify_password(password.as_bytes(), &parsed).is_ok())
                .unwrap_or(false)
        })
    }

    /// Signed admin token and its expiry as a unix timestamp.
    pub fn issue_token(&self) -> Result<(String, i64), AppError> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

        let claims = AdminClaims {
            sub: ADMIN_ROLE.to_string(),
            role: ADMIN_ROLE.to_string(),
            exp: expiration.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

        Ok((token, expiration.timestamp()))
    }

    pub fn decode_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::BadRequest("Invalid or expired token".into()))
    }
}

/// Extractor for routes behind the admin password.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::BadRequest("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::BadRequest("Invalid Authorization scheme".into()))?
            .trim();

        let claims = state.admin.decode_token(token)?;
        if claims.role != ADMIN_ROLE {
            return Err(AppError::Forbidden);
        }

        Ok(AdminUser {
            subject: claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> AdminKeys {
        AdminKeys::new(&["AryanM".to_string(), "DakshM".to_string()], "test-secret".into())
            .unwrap()
    }

    #[test]
    fn any_configured_password_verifies() {
        let keys = keys();
        assert!(keys.verify_password("AryanM"));
        assert!(keys.verify_password("DakshM"));
        assert!(!keys.verify_password("aryanm"));
        assert!(!keys.verify_password(""));
    }

    #[test]
    fn issued_token_decodes_with_admin_role() {
        let keys = keys();
        let (token, expires_at) = keys.issue_token().unwrap();
        let claims = keys.decode_token(&token).unwrap();
        assert_eq!(claims.role, ADMIN_ROLE);
        assert_eq!(claims.exp as i64, expires_at);
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let other = AdminKeys::new(&["x".to_string()], "other-secret".into()).unwrap();
        let (token, _) = other.issue_token().unwrap();
        assert!(matches!(
            keys().decode_token(&token),
            Err(AppError::BadRequest(_))
        ));
    }
}
