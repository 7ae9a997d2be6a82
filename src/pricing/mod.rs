//! Pricing engine for Stayrate.
//!
//! Encodes user selections into the feature vector the trained model
//! expects, obtains a base prediction, and applies the business-rule
//! adjustment chain. The calculation itself is pure; all I/O happens at
//! startup in `crate::artifacts`.

pub mod adjustments;
pub mod encoder;
pub mod model;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use adjustments::round_money;
pub use encoder::{FeatureEncoder, FeatureSchema, ListingSelection};
pub use model::PricingModel;
pub use services::{recommend_price, PricingError, Quote};
