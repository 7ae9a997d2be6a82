//! Handle for the trained pricing model artifact.

use serde::Deserialize;

/// Pre-trained linear regression: an intercept plus one coefficient per
/// feature-schema column, in schema order. Deserialized from the model
/// artifact at startup and validated against the schema in
/// `crate::artifacts`.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl PricingModel {
    /// Score one feature vector. The vector must already be in schema order;
    /// the encoder guarantees the length.
    pub fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.coefficients.len());
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(coefficient, value)| coefficient * value)
                .sum::<f64>()
    }

    /// True when the intercept and every coefficient are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.coefficients.iter().all(|c| c.is_finite())
    }
}
