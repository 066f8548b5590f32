//! Bundle catalog lookups and the greedy stay allocator.
//!
//! Bundles are fixed-price packages a group can book for a block of
//! nights inside one season. The allocator packs a stay into bundle
//! blocks where it can and falls back to per-night pricing where it
//! cannot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::calculators::{nightly_extra, nightly_for};
use super::models::{Bundle, ExtraKind, GroupConfig, Occupancy, OverrideMode, Season};

/// One night of the stay with its resolved season.
#[derive(Debug, Clone, Copy)]
pub struct StayNight<'a> {
    pub date: NaiveDate,
    pub season: &'a Season,
}

/// A contiguous priced slice of the stay.
#[derive(Debug, Clone)]
pub enum PricedUnit<'a> {
    /// A single night charged at the (group-overridden) nightly rate.
    Night {
        night: StayNight<'a>,
        amount: Decimal,
    },
    /// A block of nights consumed atomically by one bundle.
    Block {
        nights: Vec<StayNight<'a>>,
        bundle_id: Uuid,
        amount: Decimal,
    },
}

impl PricedUnit<'_> {
    pub fn amount(&self) -> Decimal {
        match self {
            PricedUnit::Night { amount, .. } => *amount,
            PricedUnit::Block { amount, .. } => *amount,
        }
    }
}

/// The group's bundles for a season that fit within `max_nights`,
/// largest first.
///
/// The sort is stable, so same-length bundles keep their configuration
/// order and the earliest one wins a tie.
pub fn candidates<'a>(
    group: &'a GroupConfig,
    season_id: Uuid,
    max_nights: usize,
) -> Vec<&'a Bundle> {
    let mut matches: Vec<&Bundle> = group
        .bundles
        .iter()
        .filter(|b| b.season_id == season_id && b.nights > 0 && b.nights as usize <= max_nights)
        .collect();
    matches.sort_by(|a, b| b.nights.cmp(&a.nights));
    matches
}

/// Partition the stay into bundle blocks and standard-priced nights.
///
/// Walks the nights left to right with a cursor. At each position it
/// measures the run of consecutive nights sharing the cursor's season (a
/// block never crosses a season boundary) and consumes the largest
/// bundle fitting that run. When nothing fits, the single night at the
/// cursor is charged at the nightly rate and the search restarts from
/// the next night, so a short leftover run never blocks a later bundle.
/// Without a group every night is priced standard.
pub fn allocate<'a>(
    nights: &[StayNight<'a>],
    group: Option<&'a GroupConfig>,
    pitch_type: &str,
    occupancy: &Occupancy,
) -> Vec<PricedUnit<'a>> {
    let mut units = Vec::new();
    let mut cursor = 0;

    while cursor < nights.len() {
        let night = nights[cursor];
        let season = night.season;
        let mode = group
            .map(|g| g.mode_for(season.id))
            .unwrap_or(OverrideMode::Standard);

        let run = nights[cursor..]
            .iter()
            .take_while(|n| n.season.id == season.id)
            .count();

        let bundle = group.and_then(|g| candidates(g, season.id, run).first().copied());

        match bundle {
            Some(bundle) => {
                let block = nights[cursor..cursor + bundle.nights as usize].to_vec();
                let amount = block_price(bundle, season, &mode, occupancy, block.len());
                units.push(PricedUnit::Block {
                    nights: block,
                    bundle_id: bundle.id,
                    amount,
                });
                cursor += bundle.nights as usize;
            }
            None => {
                let amount = nightly_for(season, &mode, pitch_type, occupancy);
                units.push(PricedUnit::Night { night, amount });
                cursor += 1;
            }
        }
    }

    units
}

/// Total for one bundle block.
///
/// The fixed pitch price covers the pitch and the persons on it for the
/// whole block. Extras listed in `unit_prices` add their flat amount
/// once; any other extra present in the occupancy keeps its nightly
/// charge, summed across the block.
fn block_price(
    bundle: &Bundle,
    season: &Season,
    mode: &OverrideMode,
    occupancy: &Occupancy,
    block_nights: usize,
) -> Decimal {
    let mut total = bundle.pitch_price;
    for kind in ExtraKind::ALL {
        let count = occupancy.count(kind);
        if count == 0 {
            continue;
        }
        match bundle.unit_prices.get(&kind) {
            Some(flat) => total += *flat,
            None if kind == ExtraKind::Person => {}
            None => {
                total +=
                    nightly_extra(season, mode, kind, count) * Decimal::from(block_nights as i32)
            }
        }
    }
    total
}
