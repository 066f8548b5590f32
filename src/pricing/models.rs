//! Domain models for the pricing configuration snapshot.
//!
//! Rate configuration lives in Postgres and is loaded read-only, one
//! snapshot per calculation. These models use sqlx's FromRow derive for
//! direct database deserialization; JSONB rate maps come through
//! `sqlx::types::Json`.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Per-unit extra charged on top of the pitch rate.
///
/// Doubles as the key type for the JSONB rate maps, so the serde names
/// are the stored map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    Person,
    Child,
    Dog,
    Car,
}

impl ExtraKind {
    pub const ALL: [ExtraKind; 4] = [Self::Person, Self::Child, Self::Dog, Self::Car];
}

/// Occupancy counts for a stay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub guests: i32,
    pub children: i32,
    pub dogs: i32,
    pub cars: i32,
}

impl Occupancy {
    pub fn count(&self, kind: ExtraKind) -> i32 {
        match kind {
            ExtraKind::Person => self.guests,
            ExtraKind::Child => self.children,
            ExtraKind::Dog => self.dogs,
            ExtraKind::Car => self.cars,
        }
    }

    /// All counts non-negative.
    pub fn is_valid(&self) -> bool {
        self.guests >= 0 && self.children >= 0 && self.dogs >= 0 && self.cars >= 0
    }
}

/// Season from pricing_season
#[derive(Debug, Clone, FromRow)]
pub struct Season {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub priority: i32,
    pub active: bool,
    /// Nightly pitch rate keyed by pitch type (e.g. "piazzola", "tenda").
    pub pitch_rates: Json<HashMap<String, Decimal>>,
    pub person_rate: Option<Decimal>,
    pub child_rate: Option<Decimal>,
    pub dog_rate: Option<Decimal>,
    pub car_rate: Option<Decimal>,
}

impl Season {
    /// Check if this season is active and its inclusive date range covers `date`
    pub fn applies_to(&self, date: NaiveDate) -> bool {
        self.active && self.start_date <= date && date <= self.end_date
    }

    /// Nightly rate for a pitch type, 0 when the season leaves it unset
    pub fn pitch_rate(&self, pitch_type: &str) -> Decimal {
        self.pitch_rates
            .get(pitch_type)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Nightly per-unit rate for an extra, 0 when the season leaves it unset
    pub fn unit_rate(&self, kind: ExtraKind) -> Decimal {
        match kind {
            ExtraKind::Person => self.person_rate,
            ExtraKind::Child => self.child_rate,
            ExtraKind::Dog => self.dog_rate,
            ExtraKind::Car => self.car_rate,
        }
        .unwrap_or(Decimal::ZERO)
    }
}

/// CustomerGroup from pricing_customergroup
#[derive(Debug, Clone, FromRow)]
pub struct CustomerGroup {
    pub id: Uuid,
    pub name: String,
}

/// Partial rate overrides for one (group, season) pair.
///
/// Any field left out falls back to the season's standard value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateOverrides {
    #[serde(default)]
    pub pitch_rates: HashMap<String, Decimal>,
    pub person_rate: Option<Decimal>,
    pub child_rate: Option<Decimal>,
    pub dog_rate: Option<Decimal>,
    pub car_rate: Option<Decimal>,
}

impl RateOverrides {
    pub fn is_empty(&self) -> bool {
        self.pitch_rates.is_empty()
            && self.person_rate.is_none()
            && self.child_rate.is_none()
            && self.dog_rate.is_none()
            && self.car_rate.is_none()
    }

    /// Pitch rate with the override applied, falling back to the season
    pub fn pitch_rate(&self, season: &Season, pitch_type: &str) -> Decimal {
        self.pitch_rates
            .get(pitch_type)
            .copied()
            .unwrap_or_else(|| season.pitch_rate(pitch_type))
    }

    /// Per-unit rate with the override applied, falling back to the season
    pub fn unit_rate(&self, season: &Season, kind: ExtraKind) -> Decimal {
        match kind {
            ExtraKind::Person => self.person_rate,
            ExtraKind::Child => self.child_rate,
            ExtraKind::Dog => self.dog_rate,
            ExtraKind::Car => self.car_rate,
        }
        .unwrap_or_else(|| season.unit_rate(kind))
    }
}

/// How a group's nightly charge replaces the standard one for a season.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OverrideMode {
    /// No override, standard season rates apply.
    #[default]
    Standard,
    /// Percentage discount (0-100) off the standard nightly charge.
    Discount(Decimal),
    /// Per-field replacement of the season's rates.
    CustomRates(RateOverrides),
}

/// SeasonConfiguration from pricing_seasonconfiguration
#[derive(Debug, Clone, FromRow)]
pub struct SeasonConfiguration {
    pub id: Uuid,
    pub group_id: Uuid,
    pub season_id: Uuid,
    pub discount_percent: Option<Decimal>,
    pub custom_rates: Option<Json<RateOverrides>>,
}

impl SeasonConfiguration {
    /// Collapse the stored fields into a single override mode.
    ///
    /// The management UI is expected to persist only one of the two
    /// fields, but the schema does not enforce it. When both are set,
    /// custom rates win over the discount.
    pub fn mode(&self) -> OverrideMode {
        if let Some(rates) = &self.custom_rates {
            if !rates.is_empty() {
                return OverrideMode::CustomRates(rates.0.clone());
            }
        }
        match self.discount_percent {
            Some(pct) if !pct.is_zero() => OverrideMode::Discount(pct),
            _ => OverrideMode::Standard,
        }
    }
}

/// Bundle from pricing_bundle
///
/// A fixed-price package covering a contiguous block of nights within one
/// season. `pitch_price` replaces the per-night pitch and person charges
/// for the block; `unit_prices` flat-prices listed extras once per block.
#[derive(Debug, Clone, FromRow)]
pub struct Bundle {
    pub id: Uuid,
    pub group_id: Uuid,
    pub season_id: Uuid,
    pub nights: i32,
    pub pitch_price: Decimal,
    pub unit_prices: Json<HashMap<ExtraKind, Decimal>>,
}

/// A customer group with its season overrides and bundles.
#[derive(Debug, Clone)]
pub struct GroupConfig {
    pub group: CustomerGroup,
    pub season_configs: Vec<SeasonConfiguration>,
    /// In configuration order; ties between same-length bundles go to the
    /// earliest entry.
    pub bundles: Vec<Bundle>,
}

impl GroupConfig {
    /// Override mode for one season, `Standard` when none is configured
    pub fn mode_for(&self, season_id: Uuid) -> OverrideMode {
        self.season_configs
            .iter()
            .find(|c| c.season_id == season_id)
            .map(SeasonConfiguration::mode)
            .unwrap_or_default()
    }
}

/// Immutable configuration snapshot driving one calculation.
#[derive(Debug, Clone)]
pub struct PricingSnapshot {
    /// In configuration order; equal-priority overlaps resolve to the
    /// earliest entry.
    pub seasons: Vec<Season>,
    pub group: Option<GroupConfig>,
}

impl PricingSnapshot {
    /// Whether any season configures a rate for this pitch type
    pub fn knows_pitch_type(&self, pitch_type: &str) -> bool {
        self.seasons
            .iter()
            .any(|s| s.pitch_rates.contains_key(pitch_type))
    }
}

/// A stay to be priced: `[check_in, check_out)`, check-out exclusive.
#[derive(Debug, Clone)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub pitch_type: String,
    pub occupancy: Occupancy,
    pub group_id: Option<Uuid>,
}

impl StayRequest {
    /// The calendar nights of the stay, in order
    pub fn nights(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut date = self.check_in;
        while date < self.check_out {
            dates.push(date);
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config(discount: Option<Decimal>, custom: Option<RateOverrides>) -> SeasonConfiguration {
        SeasonConfiguration {
            id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            season_id: Uuid::new_v4(),
            discount_percent: discount,
            custom_rates: custom.map(Json),
        }
    }

    #[test]
    fn test_mode_standard_when_nothing_configured() {
        assert_eq!(config(None, None).mode(), OverrideMode::Standard);
        assert_eq!(config(Some(dec!(0)), None).mode(), OverrideMode::Standard);
        assert_eq!(
            config(None, Some(RateOverrides::default())).mode(),
            OverrideMode::Standard
        );
    }

    #[test]
    fn test_mode_discount() {
        assert_eq!(
            config(Some(dec!(10)), None).mode(),
            OverrideMode::Discount(dec!(10))
        );
    }

    #[test]
    fn test_mode_custom_rates_win_over_discount() {
        let overrides = RateOverrides {
            person_rate: Some(dec!(3)),
            ..Default::default()
        };
        let mode = config(Some(dec!(10)), Some(overrides.clone())).mode();
        assert_eq!(mode, OverrideMode::CustomRates(overrides));
    }

    #[test]
    fn test_empty_custom_rates_fall_back_to_discount() {
        let mode = config(Some(dec!(25)), Some(RateOverrides::default())).mode();
        assert_eq!(mode, OverrideMode::Discount(dec!(25)));
    }

    #[test]
    fn test_stay_nights_expansion() {
        let stay = StayRequest {
            check_in: NaiveDate::from_ymd_opt(2026, 7, 30).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(),
            pitch_type: "piazzola".to_string(),
            occupancy: Occupancy::default(),
            group_id: None,
        };
        let nights = stay.nights();
        assert_eq!(nights.len(), 3);
        assert_eq!(nights[0], NaiveDate::from_ymd_opt(2026, 7, 30).unwrap());
        assert_eq!(nights[2], NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    }

    #[test]
    fn test_occupancy_validation() {
        assert!(Occupancy::default().is_valid());
        let bad = Occupancy {
            dogs: -1,
            ..Default::default()
        };
        assert!(!bad.is_valid());
    }
}
