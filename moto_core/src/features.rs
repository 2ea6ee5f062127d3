//! Feature vector construction from raw form input.
//!
//! The spec-filter service only keeps the fields the client actually
//! filled in; the rating predictor builds the model's full input map with
//! zero defaults and a one-hot category flag, then flattens it into the
//! feature order the model artifact declares.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::categories::{category_index, CATEGORY_COLUMNS};
use crate::record::SpecColumn;

/// The `/recommend` form body. Every field is optional free text; an empty
/// string counts as not supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecForm {
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Displacement")]
    pub displacement: Option<String>,
    #[serde(rename = "Power")]
    pub power: Option<String>,
    #[serde(rename = "Torque")]
    pub torque: Option<String>,
    #[serde(rename = "Bore")]
    pub bore: Option<String>,
    #[serde(rename = "Stroke")]
    pub stroke: Option<String>,
    #[serde(rename = "Fuel_capacity")]
    pub fuel_capacity: Option<String>,
    #[serde(rename = "Dry_weight")]
    pub dry_weight: Option<String>,
    #[serde(rename = "Wheelbase")]
    pub wheelbase: Option<String>,
    #[serde(rename = "Seat_height")]
    pub seat_height: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
}

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("could not convert {field} value {value:?} to a number")]
    Invalid { field: String, value: String },
}

impl SpecForm {
    /// Raw text of one numeric field, `None` when absent or empty.
    fn raw(&self, col: SpecColumn) -> Option<&str> {
        let text = match col {
            SpecColumn::Year => &self.year,
            SpecColumn::Displacement => &self.displacement,
            SpecColumn::Power => &self.power,
            SpecColumn::Torque => &self.torque,
            SpecColumn::Bore => &self.bore,
            SpecColumn::Stroke => &self.stroke,
            SpecColumn::FuelCapacity => &self.fuel_capacity,
            SpecColumn::DryWeight => &self.dry_weight,
            SpecColumn::Wheelbase => &self.wheelbase,
            SpecColumn::SeatHeight => &self.seat_height,
        };
        text.as_deref().filter(|t| !t.is_empty())
    }

    /// Requested category, `None` when absent or empty.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

fn parse_field(col: SpecColumn, raw: &str) -> Result<f64, FeatureError> {
    raw.trim().parse::<f64>().map_err(|_| FeatureError::Invalid {
        field: col.form_field().to_string(),
        value: raw.to_string(),
    })
}

/// Exact-filter mode: the supplied fields only, as `(column, value)` pairs
/// in schema order. Absent fields are omitted so filtering later ignores
/// that dimension entirely.
pub fn supplied_features(form: &SpecForm) -> Result<Vec<(SpecColumn, f64)>, FeatureError> {
    let mut features = Vec::new();
    for col in SpecColumn::ALL {
        if let Some(raw) = form.raw(col) {
            features.push((col, parse_field(col, raw)?));
        }
    }
    Ok(features)
}

/// Predict mode: the model's complete input map keyed by dataset column
/// name. Numeric fields default to 0, every category flag is 0 except the
/// one matching `Category_{supplied}`, set to 1 when the label is
/// recognized.
pub fn full_feature_map(form: &SpecForm) -> Result<HashMap<String, f64>, FeatureError> {
    let mut map = HashMap::with_capacity(SpecColumn::ALL.len() + CATEGORY_COLUMNS.len());
    for col in SpecColumn::ALL {
        let value = match form.raw(col) {
            Some(raw) => parse_field(col, raw)?,
            None => 0.0,
        };
        map.insert(col.column_name().to_string(), value);
    }
    for col in CATEGORY_COLUMNS {
        map.insert(col.to_string(), 0.0);
    }
    if let Some(idx) = form.category().and_then(category_index) {
        map.insert(CATEGORY_COLUMNS[idx].to_string(), 1.0);
    }
    Ok(map)
}

/// Flatten a feature map into the order the model artifact declares.
/// Names the map does not carry order as 0.
pub fn ordered_values(map: &HashMap<String, f64>, feat_list: &[String]) -> Vec<f32> {
    let mut v = Vec::with_capacity(feat_list.len());
    for name in feat_list {
        v.push(map.get(name).copied().unwrap_or(0.0) as f32);
    }
    v
}
