//! Nearest-rating recommendation engine.
//!
//! One linear pass keeps the rows whose recorded rating lies within the
//! tolerance of the predicted rating, a stable sort orders them by
//! closeness, and the head of the list is returned. At dataset scale (low
//! thousands of rows) no index is warranted.

use serde::Serialize;

use crate::record::MotorcycleRecord;

/// Maximum absolute rating distance from the prediction.
pub const RATING_TOLERANCE: f64 = 0.10;
/// Maximum number of rows returned.
pub const MAX_RESULTS: usize = 10;

/// One recommended row with its recorded rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedPick {
    pub brand: String,
    pub model: String,
    pub rating: f64,
}

/// Up to [`MAX_RESULTS`] rows whose rating is within [`RATING_TOLERANCE`]
/// of `prediction`, ordered by ascending absolute difference. Ties keep
/// dataset order; rows without a usable rating are skipped.
pub fn similar_by_rating(records: &[MotorcycleRecord], prediction: f64) -> Vec<RatedPick> {
    let mut picks: Vec<(f64, &MotorcycleRecord)> = records
        .iter()
        .filter_map(|rec| {
            let rating = rec.rating?;
            let diff = (rating - prediction).abs();
            (diff <= RATING_TOLERANCE).then_some((diff, rec))
        })
        .collect();

    // sort_by is stable, so equal differences preserve dataset order.
    picks.sort_by(|a, b| a.0.total_cmp(&b.0));
    picks.truncate(MAX_RESULTS);

    picks
        .into_iter()
        .map(|(_, rec)| RatedPick {
            brand: rec.brand.clone(),
            model: rec.model.clone(),
            rating: rec.rating.unwrap_or_default(),
        })
        .collect()
}
