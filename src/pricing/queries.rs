//! Database queries for the pricing configuration snapshot.
//!
//! All queries are read-only; the engine never mutates configuration.
//! Rows are ordered by creation so the engine's first-configured-wins
//! tie-breaks stay stable.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

use super::models::{Bundle, CustomerGroup, Season, SeasonConfiguration};

/// All seasons, in configuration order
pub async fn get_seasons(pool: &PgPool) -> Result<Vec<Season>, AppError> {
    let seasons = sqlx::query_as::<_, Season>(
        r#"
        SELECT
            id, name, color, start_date, end_date, priority, active,
            pitch_rates, person_rate, child_rate, dog_rate, car_rate
        FROM pricing_season
        ORDER BY created_at, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(seasons)
}

/// A customer group by id
pub async fn get_customer_group(
    pool: &PgPool,
    group_id: Uuid,
) -> Result<Option<CustomerGroup>, AppError> {
    let group = sqlx::query_as::<_, CustomerGroup>(
        r#"
        SELECT id, name
        FROM pricing_customergroup
        WHERE id = $1
        "#,
    )
    .bind(group_id)
    .fetch_optional(pool)
    .await?;

    Ok(group)
}

/// A group's per-season rate overrides
pub async fn get_season_configurations(
    pool: &PgPool,
    group_id: Uuid,
) -> Result<Vec<SeasonConfiguration>, AppError> {
    let configs = sqlx::query_as::<_, SeasonConfiguration>(
        r#"
        SELECT id, group_id, season_id, discount_percent, custom_rates
        FROM pricing_seasonconfiguration
        WHERE group_id = $1
        "#,
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(configs)
}

/// A group's bundles, in configuration order
pub async fn get_bundles(pool: &PgPool, group_id: Uuid) -> Result<Vec<Bundle>, AppError> {
    let bundles = sqlx::query_as::<_, Bundle>(
        r#"
        SELECT id, group_id, season_id, nights, pitch_price, unit_prices
        FROM pricing_bundle
        WHERE group_id = $1
        ORDER BY created_at, id
        "#,
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(bundles)
}
