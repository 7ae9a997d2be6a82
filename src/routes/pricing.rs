//! Pricing form route handlers

use askama::Template;
use axum::{extract::State, response::Html, Form};

use crate::error::Result;
use crate::pricing::requests::QuoteRequest;
use crate::pricing::responses::QuoteView;
use crate::pricing::services;
use crate::AppState;

const CAPTION: &str = "Price = ML prediction + weekend, demand & host-quality adjustments";

/// Pricing form template (also renders the result after a submission)
#[derive(Template)]
#[template(path = "pricing/form.html")]
struct PricingFormTemplate {
    room_types: Vec<String>,
    neighbourhoods: Vec<String>,
    quote: Option<QuoteView>,
    caption: &'static str,
}

impl PricingFormTemplate {
    fn new(state: &AppState, quote: Option<QuoteView>) -> Self {
        Self {
            room_types: state.choices.room_types.clone(),
            neighbourhoods: state.choices.neighbourhoods.clone(),
            quote,
            caption: CAPTION,
        }
    }
}

/// The single-page form
pub async fn form(State(state): State<AppState>) -> Result<Html<String>> {
    let template = PricingFormTemplate::new(&state, None);
    Ok(Html(template.render()?))
}

/// Compute a quote and re-render the page with the result
pub async fn quote(
    State(state): State<AppState>,
    Form(request): Form<QuoteRequest>,
) -> Result<Html<String>> {
    let quote = services::recommend_price(&state.model, &state.encoder, &request)?;
    tracing::debug!(
        room_type = %request.room_type,
        neighbourhood = %request.neighbourhood,
        base = %quote.base_price,
        recommended = %quote.final_price,
        "quote computed"
    );

    let template = PricingFormTemplate::new(&state, Some(QuoteView::from(&quote)));
    Ok(Html(template.render()?))
}
