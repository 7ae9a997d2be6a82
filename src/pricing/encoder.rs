//! Feature-vector construction for the pricing model.
//!
//! The trained model expects an ordered numeric vector matching the column
//! list it was trained with. Categorical selections become one-hot columns
//! named `<category prefix><value>`. Rather than concatenating strings per
//! request, every known categorical value is resolved against the schema
//! once at startup; values the training run never saw resolve to `None` and
//! their activation is a silent no-op at request time (the model then sees
//! the category's implicit baseline).

use std::collections::HashMap;

/// Schema column holding the guest count.
pub const ACCOMMODATES_COLUMN: &str = "accommodates";

/// Schema column the model was trained with but the form never supplies;
/// pinned to zero.
pub const PRICE_PER_GUEST_COLUMN: &str = "price_per_guest";

/// Schema column holding the 0/1 superhost flag.
pub const SUPERHOST_COLUMN: &str = "superhost_flag";

/// One-hot column prefix for room types.
pub const ROOM_TYPE_PREFIX: &str = "room_type_";

/// One-hot column prefix for neighbourhoods.
pub const NEIGHBOURHOOD_PREFIX: &str = "neighbourhood_";

/// Ordered list of the columns the model expects, with O(1) name lookup.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { columns, index }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }
}

/// Raw user selections, before encoding.
#[derive(Debug, Clone)]
pub struct ListingSelection {
    pub accommodates: u8,
    pub superhost: bool,
    pub room_type: String,
    pub neighbourhood: String,
}

/// Encodes selections into model-ready feature vectors.
///
/// Built once at startup from the schema and the reference dataset's
/// distinct categorical values. Read-only afterward.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    schema: FeatureSchema,
    accommodates_idx: Option<usize>,
    superhost_idx: Option<usize>,
    room_type_columns: HashMap<String, Option<usize>>,
    neighbourhood_columns: HashMap<String, Option<usize>>,
}

impl FeatureEncoder {
    pub fn new(schema: FeatureSchema, room_types: &[String], neighbourhoods: &[String]) -> Self {
        let room_type_columns = resolve_category(&schema, ROOM_TYPE_PREFIX, room_types);
        let neighbourhood_columns = resolve_category(&schema, NEIGHBOURHOOD_PREFIX, neighbourhoods);
        let accommodates_idx = schema.position(ACCOMMODATES_COLUMN);
        let superhost_idx = schema.position(SUPERHOST_COLUMN);
        Self {
            schema,
            accommodates_idx,
            superhost_idx,
            room_type_columns,
            neighbourhood_columns,
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Build the feature vector for one selection.
    ///
    /// The output always has exactly schema length, in schema order. Columns
    /// with no corresponding input stay zero, which includes
    /// `price_per_guest` and the one-hot block of any category value that
    /// lacks a schema column.
    pub fn encode(&self, selection: &ListingSelection) -> Vec<f64> {
        let mut features = vec![0.0; self.schema.len()];

        if let Some(i) = self.accommodates_idx {
            features[i] = f64::from(selection.accommodates);
        }
        if let Some(i) = self.superhost_idx {
            features[i] = if selection.superhost { 1.0 } else { 0.0 };
        }
        if let Some(&Some(i)) = self.room_type_columns.get(selection.room_type.as_str()) {
            features[i] = 1.0;
        }
        if let Some(&Some(i)) = self.neighbourhood_columns.get(selection.neighbourhood.as_str()) {
            features[i] = 1.0;
        }

        features
    }
}

/// Resolve each categorical value to its one-hot column index, if any.
///
/// Unresolved values are reported here, once, instead of silently recurring
/// on every request.
fn resolve_category(
    schema: &FeatureSchema,
    prefix: &str,
    values: &[String],
) -> HashMap<String, Option<usize>> {
    let mut columns = HashMap::with_capacity(values.len());
    for value in values {
        let idx = schema.position(&format!("{prefix}{value}"));
        if idx.is_none() {
            tracing::warn!(
                prefix,
                value = %value,
                "reference value has no schema column; selections of it encode as the baseline"
            );
        }
        columns.insert(value.clone(), idx);
    }
    columns
}
