use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stayrate_web::config::Settings;
use stayrate_web::pricing::FeatureEncoder;
use stayrate_web::{artifacts, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();

    // Artifacts load once; everything downstream treats them as read-only.
    let schema = artifacts::load_feature_schema(&settings.features_path)?;
    let model = artifacts::load_model(&settings.model_path, &schema)?;
    let choices = artifacts::load_reference_data(&settings.reference_path)?;
    tracing::info!(
        columns = schema.len(),
        room_types = choices.room_types.len(),
        neighbourhoods = choices.neighbourhoods.len(),
        "artifacts loaded"
    );

    let encoder = FeatureEncoder::new(schema, &choices.room_types, &choices.neighbourhoods);

    let state = AppState {
        model: Arc::new(model),
        encoder: Arc::new(encoder),
        choices: Arc::new(choices),
    };

    let app = Router::new()
        .route("/", get(routes::pricing::form))
        .route("/quote", post(routes::pricing::quote))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    tracing::info!(addr = %settings.bind_addr, "listening");
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
