//! Pricing route handlers
//!
//! JSON endpoints called by the booking system before a booking is
//! persisted.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::models::StayRequest;
use super::requests::{QuoteStayRequest, ResolveSeasonQuery};
use super::responses::{QuoteStayResponse, SeasonResponse};
use super::services;

/// Build the pricing API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/season", get(season))
}

/// Price a stay and return the total with a per-night breakdown
pub async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteStayRequest>,
) -> Result<Json<QuoteStayResponse>> {
    let request = StayRequest::from(req);
    let quote = services::quote_stay(&state.db, &request).await?;
    Ok(Json(QuoteStayResponse::from(quote)))
}

/// Resolve the season applicable to a date
pub async fn season(
    State(state): State<AppState>,
    Query(query): Query<ResolveSeasonQuery>,
) -> Result<Json<SeasonResponse>> {
    let season = services::resolve_season(&state.db, query.date).await?;
    Ok(Json(SeasonResponse::from(season)))
}
