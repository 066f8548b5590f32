//! Pricing engine for Camping Campo Verde.
//!
//! Resolves multi-night stay prices from seasonal rate periods, customer
//! group overrides and fixed-price bundles. The booking system calls
//! this service over HTTP/JSON; booking persistence, customer management
//! and authentication live elsewhere.

pub mod error;
pub mod pricing;

use sqlx::PgPool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
