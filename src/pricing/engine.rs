//! Stay price calculation over an immutable configuration snapshot.
//!
//! `calculate` is a pure function: no I/O, no shared state, safe to call
//! concurrently. Snapshot loading lives in `services`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::bundles::{self, PricedUnit, StayNight};
use super::calendar;
use super::calculators::{apportion, round_money};
use super::models::{PricingSnapshot, StayRequest};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// Fatal configuration gap: the season calendar must cover every
    /// bookable date.
    #[error("no active season covers {date}")]
    NoSeasonForDate { date: NaiveDate },

    #[error("unknown customer group {group_id}")]
    UnknownGroup { group_id: Uuid },

    #[error("invalid stay request: {reason}")]
    InvalidRequest { reason: String },
}

/// Whether a night was priced standard or apportioned from a bundle
/// block. Display only; the quote total is computed from whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NightSource {
    Standard,
    Bundle,
}

/// One calendar night of the quote breakdown.
#[derive(Debug, Clone)]
pub struct NightBreakdown {
    pub date: NaiveDate,
    pub season_name: String,
    pub season_color: String,
    pub amount: Decimal,
    pub source: NightSource,
}

/// A priced stay: authoritative total plus per-night display breakdown.
#[derive(Debug, Clone)]
pub struct Quote {
    pub total: Decimal,
    pub breakdown: Vec<NightBreakdown>,
}

/// Calculate the total and per-night breakdown for a stay.
///
/// Validates the request, expands `[check_in, check_out)` into nights,
/// resolves each night's season, packs the nights into priced units and
/// sums them. The total is rounded to cents, half-up. Bundle blocks are
/// split evenly across their nights in the breakdown; the leftover cents
/// land on the block's first nights so the entries sum back to the block
/// price exactly.
pub fn calculate(request: &StayRequest, snapshot: &PricingSnapshot) -> Result<Quote, PricingError> {
    validate(request, snapshot)?;

    let mut nights = Vec::new();
    for date in request.nights() {
        let season = calendar::resolve(&snapshot.seasons, date)?;
        nights.push(StayNight { date, season });
    }

    let units = bundles::allocate(
        &nights,
        snapshot.group.as_ref(),
        &request.pitch_type,
        &request.occupancy,
    );

    let total: Decimal = units.iter().map(PricedUnit::amount).sum();

    let mut breakdown = Vec::with_capacity(nights.len());
    for unit in &units {
        match unit {
            PricedUnit::Night { night, amount } => {
                breakdown.push(entry(night, round_money(*amount, 2), NightSource::Standard));
            }
            PricedUnit::Block { nights, amount, .. } => {
                let shares = apportion(*amount, nights.len() as i32);
                for (night, share) in nights.iter().zip(shares) {
                    breakdown.push(entry(night, share, NightSource::Bundle));
                }
            }
        }
    }

    Ok(Quote {
        total: round_money(total, 2),
        breakdown,
    })
}

fn entry(night: &StayNight<'_>, amount: Decimal, source: NightSource) -> NightBreakdown {
    NightBreakdown {
        date: night.date,
        season_name: night.season.name.clone(),
        season_color: night.season.color.clone(),
        amount,
        source,
    }
}

/// Reject bad input before any calculation begins.
fn validate(request: &StayRequest, snapshot: &PricingSnapshot) -> Result<(), PricingError> {
    if request.check_out <= request.check_in {
        return Err(PricingError::InvalidRequest {
            reason: "check-out must be after check-in".to_string(),
        });
    }
    if !request.occupancy.is_valid() {
        return Err(PricingError::InvalidRequest {
            reason: "occupancy counts must be non-negative".to_string(),
        });
    }
    if !snapshot.knows_pitch_type(&request.pitch_type) {
        return Err(PricingError::InvalidRequest {
            reason: format!("unknown pitch type '{}'", request.pitch_type),
        });
    }
    Ok(())
}
