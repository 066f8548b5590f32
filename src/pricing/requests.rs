//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use super::models::{Occupancy, StayRequest};

/// Request to price a stay
#[derive(Debug, Deserialize)]
pub struct QuoteStayRequest {
    pub check_in: NaiveDate,
    /// Exclusive: the night before check-out is the last one charged.
    pub check_out: NaiveDate,
    pub pitch_type: String,
    #[serde(default)]
    pub guests: i32,
    #[serde(default)]
    pub children: i32,
    #[serde(default)]
    pub dogs: i32,
    #[serde(default)]
    pub cars: i32,
    #[serde(default)]
    pub group_id: Option<Uuid>,
}

impl From<QuoteStayRequest> for StayRequest {
    fn from(req: QuoteStayRequest) -> Self {
        StayRequest {
            check_in: req.check_in,
            check_out: req.check_out,
            pitch_type: req.pitch_type,
            occupancy: Occupancy {
                guests: req.guests,
                children: req.children,
                dogs: req.dogs,
                cars: req.cars,
            },
            group_id: req.group_id,
        }
    }
}

/// Query parameters for season resolution
#[derive(Debug, Deserialize)]
pub struct ResolveSeasonQuery {
    pub date: NaiveDate,
}
