//! Core pricing calculation functions.
//!
//! Pure functions for the nightly rate math - no database access.
//! Group overrides are applied here; bundle packing lives in `bundles`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{ExtraKind, Occupancy, OverrideMode, Season};

/// Round to specified decimal places, half-up (ROUND_HALF_UP).
///
/// Booking totals are rounded the way the front desk expects: exactly
/// halfway values move away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use campoverde_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// assert_eq!(round_money(dec!(1.235), 2), dec!(1.24));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Standard nightly charge for a season, pitch type and occupancy.
///
/// Pitch rate plus one per-unit rate per occupant/extra, every rate
/// defaulting to 0 when the season leaves it unset.
pub fn nightly_standard(season: &Season, pitch_type: &str, occupancy: &Occupancy) -> Decimal {
    season.pitch_rate(pitch_type)
        + ExtraKind::ALL
            .iter()
            .map(|&kind| Decimal::from(occupancy.count(kind)) * season.unit_rate(kind))
            .sum::<Decimal>()
}

/// Nightly charge with the group's override mode applied.
pub fn nightly_for(
    season: &Season,
    mode: &OverrideMode,
    pitch_type: &str,
    occupancy: &Occupancy,
) -> Decimal {
    match mode {
        OverrideMode::Standard => nightly_standard(season, pitch_type, occupancy),
        OverrideMode::Discount(pct) => {
            nightly_standard(season, pitch_type, occupancy) * discount_multiplier(*pct)
        }
        OverrideMode::CustomRates(overrides) => {
            overrides.pitch_rate(season, pitch_type)
                + ExtraKind::ALL
                    .iter()
                    .map(|&kind| {
                        Decimal::from(occupancy.count(kind)) * overrides.unit_rate(season, kind)
                    })
                    .sum::<Decimal>()
        }
    }
}

/// Nightly charge for a single extra type alone, override applied.
///
/// Used when a bundle leaves an extra unlisted and it stays on per-night
/// pricing for the block.
pub fn nightly_extra(season: &Season, mode: &OverrideMode, kind: ExtraKind, count: i32) -> Decimal {
    let count = Decimal::from(count);
    match mode {
        OverrideMode::Standard => count * season.unit_rate(kind),
        OverrideMode::Discount(pct) => count * season.unit_rate(kind) * discount_multiplier(*pct),
        OverrideMode::CustomRates(overrides) => count * overrides.unit_rate(season, kind),
    }
}

fn discount_multiplier(pct: Decimal) -> Decimal {
    (Decimal::ONE_HUNDRED - pct) / Decimal::ONE_HUNDRED
}

/// Split a block total evenly across `parts` nights.
///
/// Rounds each share to cents, then distributes any leftover cents in
/// 0.01 increments over the first nights so the shares always sum back
/// to `total`. Display only; the block total stays authoritative.
pub fn apportion(total: Decimal, parts: i32) -> Vec<Decimal> {
    if parts <= 0 {
        return vec![];
    }

    let share = round_money(total / Decimal::from(parts), 2);
    let mut amounts = vec![share; parts as usize];

    // Remainder can be positive or negative after rounding
    let remainder = total - share * Decimal::from(parts);
    if remainder != Decimal::ZERO {
        let increment = if remainder > Decimal::ZERO {
            Decimal::new(1, 2) // 0.01
        } else {
            Decimal::new(-1, 2) // -0.01
        };

        let adjustments_needed = (remainder.abs() / Decimal::new(1, 2))
            .to_i32()
            .unwrap_or(0) as usize;

        for amount in amounts.iter_mut().take(adjustments_needed) {
            *amount += increment;
        }
    }

    amounts
}
