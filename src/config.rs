//! Environment configuration

use std::env;
use std::path::PathBuf;

/// Application settings read from the environment (via `.env` or the real
/// environment). Every setting has a default so the app runs out of the box
/// with the bundled sample artifacts.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub model_path: PathBuf,
    pub features_path: PathBuf,
    pub reference_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            model_path: path_var("MODEL_PATH", "data/pricing_model.json"),
            features_path: path_var("MODEL_FEATURES_PATH", "data/model_features.json"),
            reference_path: path_var("REFERENCE_DATA_PATH", "data/reference_data.csv"),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}
