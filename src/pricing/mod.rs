//! Pricing engine module for the campsite booking system.
//!
//! Resolves the price of a multi-night stay from the season calendar,
//! per-group overrides and fixed-price bundles. The calculation itself
//! is pure over an immutable configuration snapshot; this module is
//! called by the booking system via HTTP/JSON.

pub mod bundles;
pub mod calculators;
pub mod calendar;
pub mod engine;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use engine::{NightBreakdown, NightSource, PricingError, Quote};
pub use models::{PricingSnapshot, StayRequest};
pub use routes::router;
