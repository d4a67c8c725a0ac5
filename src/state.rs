use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::{DbPool, OrmConn},
    dto::bookings::ClaimPolicy,
    middleware::auth::AdminKeys,
};

/// Booking limits shared by every request.
#[derive(Debug, Clone)]
pub struct BookingSettings {
    pub max_seats_per_booking: usize,
    pub claim_policy: ClaimPolicy,
}

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    /// Shared behind `Arc`: `DatabaseConnection` is not `Clone` when SeaORM's
    /// `mock` feature is enabled.
    pub orm: Arc<OrmConn>,
    pub booking: Arc<BookingSettings>,
    pub admin: Arc<AdminKeys>,
}

impl AppState {
    pub fn new(pool: DbPool, orm: OrmConn, config: &AppConfig) -> anyhow::Result<Self> {
        let admin = AdminKeys::new(&config.admin_passwords, config.jwt_secret.clone())?;
        Ok(Self {
            pool,
            orm: Arc::new(orm),
            booking: Arc::new(BookingSettings {
                max_seats_per_booking: config.max_seats_per_booking,
                claim_policy: config.claim_policy,
            }),
            admin: Arc::new(admin),
        })
    }
}
