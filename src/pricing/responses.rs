//! View models rendered into the pricing templates.

use super::services::Quote;

/// One adjustment line shown in the quote breakdown.
#[derive(Debug, Clone)]
pub struct AppliedRuleView {
    pub label: &'static str,
    pub multiplier: String,
}

/// A computed quote, pre-formatted for the template.
#[derive(Debug, Clone)]
pub struct QuoteView {
    pub final_price: String,
    pub base_price: String,
    pub adjustments: Vec<AppliedRuleView>,
    pub floor_applied: bool,
}

impl From<&Quote> for QuoteView {
    fn from(quote: &Quote) -> Self {
        Self {
            final_price: format!("₹ {:.2}", quote.final_price),
            base_price: format!("₹ {:.2}", quote.base_price),
            adjustments: quote
                .applied
                .iter()
                .map(|rule| AppliedRuleView {
                    label: rule.label,
                    multiplier: format!("{}", rule.multiplier),
                })
                .collect(),
            floor_applied: quote.floor_applied,
        }
    }
}
