//! Startup loading of the model, feature schema, and reference dataset.
//!
//! All three artifacts load exactly once in `main`. Any missing or corrupt
//! artifact is fatal: without the model and schema there is nothing to
//! predict with, and without the reference dataset the selectors cannot
//! populate.

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::pricing::encoder::FeatureSchema;
use crate::pricing::model::PricingModel;

/// Errors raised while loading startup artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("feature schema {path} lists no columns")]
    EmptySchema { path: String },

    #[error("model has {coefficients} coefficients but the schema has {columns} columns")]
    SchemaMismatch { coefficients: usize, columns: usize },

    #[error("model {path} contains non-finite weights")]
    NonFiniteModel { path: String },

    #[error("reference dataset {path} has no usable room_type/neighbourhood values")]
    EmptyReference { path: String },
}

/// Distinct selectable values from the reference dataset, sorted.
#[derive(Debug, Clone)]
pub struct SelectorChoices {
    pub room_types: Vec<String>,
    pub neighbourhoods: Vec<String>,
}

/// Load the ordered column list the model was trained with.
pub fn load_feature_schema(path: &Path) -> Result<FeatureSchema, ArtifactError> {
    let file = open(path)?;
    let columns: Vec<String> = serde_json::from_reader(file).map_err(|source| {
        ArtifactError::Json {
            path: display(path),
            source,
        }
    })?;
    if columns.is_empty() {
        return Err(ArtifactError::EmptySchema { path: display(path) });
    }
    Ok(FeatureSchema::new(columns))
}

/// Load the trained model and validate it against the schema.
pub fn load_model(path: &Path, schema: &FeatureSchema) -> Result<PricingModel, ArtifactError> {
    let file = open(path)?;
    let model: PricingModel = serde_json::from_reader(file).map_err(|source| {
        ArtifactError::Json {
            path: display(path),
            source,
        }
    })?;
    validate_model(&model, schema)
        .map_err(|e| match e {
            ModelDefect::SchemaMismatch { coefficients, columns } => {
                ArtifactError::SchemaMismatch { coefficients, columns }
            }
            ModelDefect::NonFinite => ArtifactError::NonFiniteModel { path: display(path) },
        })?;
    Ok(model)
}

/// Load the reference dataset and extract the distinct selector values.
pub fn load_reference_data(path: &Path) -> Result<SelectorChoices, ArtifactError> {
    let file = open(path)?;
    let choices = read_reference_data(file).map_err(|source| ArtifactError::Csv {
        path: display(path),
        source,
    })?;
    if choices.room_types.is_empty() || choices.neighbourhoods.is_empty() {
        return Err(ArtifactError::EmptyReference { path: display(path) });
    }
    Ok(choices)
}

enum ModelDefect {
    SchemaMismatch { coefficients: usize, columns: usize },
    NonFinite,
}

fn validate_model(model: &PricingModel, schema: &FeatureSchema) -> Result<(), ModelDefect> {
    if model.coefficients.len() != schema.len() {
        return Err(ModelDefect::SchemaMismatch {
            coefficients: model.coefficients.len(),
            columns: schema.len(),
        });
    }
    if !model.is_finite() {
        return Err(ModelDefect::NonFinite);
    }
    Ok(())
}

fn read_reference_data<R: io::Read>(reader: R) -> Result<SelectorChoices, csv::Error> {
    // Only these two columns matter; anything else in the file is ignored.
    #[derive(Deserialize)]
    struct Row {
        #[serde(default)]
        room_type: Option<String>,
        #[serde(default)]
        neighbourhood: Option<String>,
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // BTreeSet gives distinct + sorted, same as the selectors expect.
    let mut room_types = BTreeSet::new();
    let mut neighbourhoods = BTreeSet::new();
    for row in csv_reader.deserialize::<Row>() {
        let row = row?;
        if let Some(value) = row.room_type.filter(|v| !v.is_empty()) {
            room_types.insert(value);
        }
        if let Some(value) = row.neighbourhood.filter(|v| !v.is_empty()) {
            neighbourhoods.insert(value);
        }
    }

    Ok(SelectorChoices {
        room_types: room_types.into_iter().collect(),
        neighbourhoods: neighbourhoods.into_iter().collect(),
    })
}

fn open(path: &Path) -> Result<File, ArtifactError> {
    File::open(path).map_err(|source| ArtifactError::Io {
        path: display(path),
        source,
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
