//! Exact-match recommendation engine.
//!
//! A row survives only if every supplied dimension equals the row's value
//! bit-for-bit; a missing dataset cell never matches. With no supplied
//! features and no category, the result is the whole dataset.

use crate::record::{MotorcycleRecord, SpecColumn};

/// `"Brand Model"` strings of every row matching all supplied features, in
/// dataset order.
///
/// A supplied, non-empty `category` additionally requires the row to carry
/// at least one truthy category flag; the specific flag named by the
/// client is not checked.
pub fn recommend(
    records: &[MotorcycleRecord],
    features: &[(SpecColumn, f64)],
    category: Option<&str>,
) -> Vec<String> {
    let category_gate = category.map_or(false, |c| !c.is_empty());

    records
        .iter()
        .filter(|rec| matches_all(rec, features))
        .filter(|rec| !category_gate || rec.in_any_category())
        .map(MotorcycleRecord::display_name)
        .collect()
}

fn matches_all(rec: &MotorcycleRecord, features: &[(SpecColumn, f64)]) -> bool {
    // Exact f64 equality: the form value must carry the same precision as
    // the dataset cell.
    features
        .iter()
        .all(|&(col, value)| rec.spec(col) == Some(value))
}
