//! Pricing service functions with database access.
//!
//! These functions assemble the configuration snapshot from the database
//! and hand it to the pure engine in `engine`.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

use super::calendar;
use super::engine::{self, PricingError, Quote};
use super::models::{GroupConfig, PricingSnapshot, Season, StayRequest};
use super::queries;

/// Load the read-only configuration snapshot for one calculation.
///
/// Seasons are always loaded; the group's overrides and bundles only
/// when the request names a group. An unknown group id is rejected
/// rather than silently priced without the group.
pub async fn load_snapshot(
    pool: &PgPool,
    group_id: Option<Uuid>,
) -> Result<PricingSnapshot, AppError> {
    let seasons = queries::get_seasons(pool).await?;

    let group = match group_id {
        Some(id) => {
            let group = queries::get_customer_group(pool, id)
                .await?
                .ok_or(PricingError::UnknownGroup { group_id: id })?;
            let season_configs = queries::get_season_configurations(pool, id).await?;
            let bundles = queries::get_bundles(pool, id).await?;
            Some(GroupConfig {
                group,
                season_configs,
                bundles,
            })
        }
        None => None,
    };

    Ok(PricingSnapshot { seasons, group })
}

/// Price a stay against the current configuration.
pub async fn quote_stay(pool: &PgPool, request: &StayRequest) -> Result<Quote, AppError> {
    let snapshot = load_snapshot(pool, request.group_id).await?;
    let quote = engine::calculate(request, &snapshot)?;

    tracing::debug!(
        check_in = %request.check_in,
        check_out = %request.check_out,
        pitch_type = %request.pitch_type,
        total = %quote.total,
        "priced stay"
    );

    Ok(quote)
}

/// Resolve which season applies to a single date.
pub async fn resolve_season(pool: &PgPool, date: NaiveDate) -> Result<Season, AppError> {
    let seasons = queries::get_seasons(pool).await?;
    let season = calendar::resolve(&seasons, date)?;
    Ok(season.clone())
}
