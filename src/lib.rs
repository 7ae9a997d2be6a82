//! Stayrate: dynamic nightly-price recommendations for Bangalore Airbnb
//! listings.
//!
//! A pre-trained regression model, its feature schema, and a reference
//! dataset are loaded once at startup. Each form submission is encoded into
//! a model-compatible feature vector, scored, and run through a fixed chain
//! of business-rule adjustments before the result is rendered.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use crate::artifacts::SelectorChoices;
use crate::pricing::{FeatureEncoder, PricingModel};

/// Shared application state.
///
/// Everything here is built once in `main` and read-only afterward; handlers
/// only ever borrow it.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<PricingModel>,
    pub encoder: Arc<FeatureEncoder>,
    pub choices: Arc<SelectorChoices>,
}
