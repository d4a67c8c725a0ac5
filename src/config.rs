use std::env;

use anyhow::{Context, anyhow};

use crate::dto::bookings::ClaimPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub admin_passwords: Vec<String>,
    pub max_seats_per_booking: usize,
    pub claim_policy: ClaimPolicy,
    pub seed_on_startup: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = database_url(&lookup)?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET is not set")?;
        let admin_passwords: Vec<String> = lookup("ADMIN_PASSWORDS")
            .context("ADMIN_PASSWORDS is not set")?
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        if admin_passwords.is_empty() {
            return Err(anyhow!("ADMIN_PASSWORDS must contain at least one password"));
        }

        let max_seats_per_booking = lookup("MAX_SEATS_PER_BOOKING")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(10);

        let claim_policy = match lookup("BOOKING_CLAIM_POLICY") {
            Some(raw) => ClaimPolicy::parse(&raw)
                .ok_or_else(|| anyhow!("unknown BOOKING_CLAIM_POLICY: {raw}"))?,
            None => ClaimPolicy::BestEffort,
        };

        let seed_on_startup = lookup("SEED_ON_STARTUP")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            admin_passwords,
            max_seats_per_booking,
            claim_policy,
            seed_on_startup,
        })
    }
}

/// Only the database location, for tools that never serve requests.
pub fn database_url_from_env() -> anyhow::Result<String> {
    database_url(&|key: &str| env::var(key).ok())
}

fn database_url<F>(lookup: &F) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup("DATABASE_URL") {
        Some(url) => Ok(url),
        None => database_url_from_parts(lookup),
    }
}

fn database_url_from_parts<F>(lookup: &F) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST").context("DATABASE_URL or DB_HOST must be set")?;
    let user = lookup("DB_USER").context("DB_USER is not set")?;
    let password = lookup("DB_PASS").unwrap_or_default();
    let name = lookup("DB_NAME").context("DB_NAME is not set")?;
    let port = lookup("DB_PORT")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5432);
    Ok(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_keys_are_missing() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/booking"),
            ("JWT_SECRET", "secret"),
            ("ADMIN_PASSWORDS", "one, two ,,"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_passwords, vec!["one", "two"]);
        assert_eq!(config.max_seats_per_booking, 10);
        assert_eq!(config.claim_policy, ClaimPolicy::BestEffort);
        assert!(!config.seed_on_startup);
    }

    #[test]
    fn database_url_is_composed_from_parts() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "booking"),
            ("DB_PASS", "pw"),
            ("DB_NAME", "cinema"),
            ("JWT_SECRET", "secret"),
            ("ADMIN_PASSWORDS", "admin"),
            ("BOOKING_CLAIM_POLICY", "all_or_nothing"),
            ("SEED_ON_STARTUP", "true"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://booking:pw@db.internal:5432/cinema");
        assert_eq!(config.claim_policy, ClaimPolicy::AllOrNothing);
        assert!(config.seed_on_startup);
    }

    #[test]
    fn missing_admin_passwords_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/booking"),
            ("JWT_SECRET", "secret"),
            ("ADMIN_PASSWORDS", " , "),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_claim_policy_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/booking"),
            ("JWT_SECRET", "secret"),
            ("ADMIN_PASSWORDS", "admin"),
            ("BOOKING_CLAIM_POLICY", "sometimes"),
        ]));
        assert!(result.is_err());
    }
}
