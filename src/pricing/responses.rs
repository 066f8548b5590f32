//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::engine::{NightBreakdown, NightSource, Quote};
use super::models::Season;

const CURRENCY: &str = "EUR";

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
        }
    }
}

/// One calendar night of the quote breakdown
#[derive(Debug, Serialize)]
pub struct NightBreakdownResponse {
    pub date: NaiveDate,
    pub season_name: String,
    pub season_color: String,
    pub amount: MoneyResponse,
    pub source: NightSource,
}

impl From<NightBreakdown> for NightBreakdownResponse {
    fn from(night: NightBreakdown) -> Self {
        Self {
            date: night.date,
            season_name: night.season_name,
            season_color: night.season_color,
            amount: MoneyResponse::new(night.amount),
            source: night.source,
        }
    }
}

/// Response for a stay quote
#[derive(Debug, Serialize)]
pub struct QuoteStayResponse {
    pub total: MoneyResponse,
    pub nights: usize,
    pub breakdown: Vec<NightBreakdownResponse>,
}

impl From<Quote> for QuoteStayResponse {
    fn from(quote: Quote) -> Self {
        Self {
            total: MoneyResponse::new(quote.total),
            nights: quote.breakdown.len(),
            breakdown: quote
                .breakdown
                .into_iter()
                .map(NightBreakdownResponse::from)
                .collect(),
        }
    }
}

/// Response for season resolution
#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub priority: i32,
}

impl From<Season> for SeasonResponse {
    fn from(season: Season) -> Self {
        Self {
            id: season.id,
            name: season.name,
            color: season.color,
            start_date: season.start_date,
            end_date: season.end_date,
            priority: season.priority,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
