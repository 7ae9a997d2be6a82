//! Quote computation: encode, predict, adjust.
//!
//! Each quote is an independent synchronous computation over the read-only
//! artifacts; nothing is shared or retained between requests.

use rust_decimal::Decimal;

use super::adjustments::{self, AppliedRule};
use super::encoder::{FeatureEncoder, ListingSelection};
use super::model::PricingModel;
use super::requests::QuoteRequest;

/// Errors a quote computation can produce.
///
/// Form deserialization already rejects out-of-set selections, so the only
/// failure left is the model emitting something that is not a price.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("model produced an unusable base price: {0}")]
    UnusablePrediction(f64),
}

/// Result of one quote computation.
#[derive(Debug, Clone)]
pub struct Quote {
    /// Raw model prediction, rounded for display.
    pub base_price: Decimal,
    /// Price after the adjustment chain and floor.
    pub final_price: Decimal,
    /// Multiplicative rules that fired, in application order.
    pub applied: Vec<AppliedRule>,
    pub floor_applied: bool,
}

/// Compute a recommended nightly price for one form submission.
pub fn recommend_price(
    model: &PricingModel,
    encoder: &FeatureEncoder,
    request: &QuoteRequest,
) -> Result<Quote, PricingError> {
    let selection = ListingSelection {
        // The slider is bounded 1-10; the clamp only matters for
        // hand-crafted posts.
        accommodates: request.accommodates.clamp(1, 10),
        superhost: request.superhost.as_flag(),
        room_type: request.room_type.clone(),
        neighbourhood: request.neighbourhood.clone(),
    };

    let features = encoder.encode(&selection);
    let raw = model.predict(&features);
    let base_price =
        Decimal::try_from(raw).map_err(|_| PricingError::UnusablePrediction(raw))?;

    let adjusted = adjustments::apply_adjustments(
        base_price,
        request.day_type,
        request.superhost.as_flag(),
        request.demand_level,
    );

    Ok(Quote {
        base_price: adjustments::round_money(base_price, 2),
        final_price: adjusted.price,
        applied: adjusted.applied,
        floor_applied: adjusted.floor_applied,
    })
}
