//! Startup loading of the curated CSV datasets.
//!
//! Loaded once in `main` and shared read-only behind an `Arc`; nothing
//! mutates a record after this module returns it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::categories::{CATEGORY_COLUMNS, CATEGORY_COUNT};
use crate::record::{MotorcycleRecord, SpecColumn};

/// Column layout of one concrete CSV file, resolved from its header row.
struct Layout {
    brand: usize,
    model: usize,
    specs: [Option<usize>; 10],
    categories: [Option<usize>; CATEGORY_COUNT],
    rating: Option<usize>,
}

impl Layout {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let brand = position("Brand").context("dataset is missing a Brand column")?;
        let model = position("Model").context("dataset is missing a Model column")?;

        let mut specs = [None; 10];
        for (i, col) in SpecColumn::ALL.into_iter().enumerate() {
            specs[i] = position(col.column_name());
        }
        let mut categories = [None; CATEGORY_COUNT];
        for (i, col) in CATEGORY_COLUMNS.iter().enumerate() {
            categories[i] = position(col);
        }

        Ok(Self {
            brand,
            model,
            specs,
            categories,
            rating: position("Rating"),
        })
    }
}

/// Parse one CSV cell as a number; empty or malformed cells become `None`.
fn numeric_cell(row: &StringRecord, idx: Option<usize>) -> Option<f64> {
    let cell = row.get(idx?)?.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok()
}

/// Load the dataset from a file path.
pub fn load(path: &Path) -> Result<Vec<MotorcycleRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open dataset at {}", path.display()))?;
    let records = from_reader(file)
        .with_context(|| format!("failed to parse dataset at {}", path.display()))?;
    tracing::info!("loaded {} motorcycles from {}", records.len(), path.display());
    Ok(records)
}

/// Load the dataset from any reader. Used directly by tests.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<MotorcycleRecord>> {
    let mut csv = csv::Reader::from_reader(reader);
    let layout = Layout::resolve(csv.headers().context("dataset has no header row")?)?;

    let mut records = Vec::new();
    for row in csv.records() {
        let row = row.context("malformed dataset row")?;

        let mut rec = MotorcycleRecord {
            brand: row.get(layout.brand).unwrap_or_default().to_string(),
            model: row.get(layout.model).unwrap_or_default().to_string(),
            rating: numeric_cell(&row, layout.rating),
            ..Default::default()
        };
        for (i, col) in SpecColumn::ALL.into_iter().enumerate() {
            rec.set_spec(col, numeric_cell(&row, layout.specs[i]));
        }
        for i in 0..CATEGORY_COUNT {
            // The curated files encode membership as 0/1 numeric cells.
            rec.categories[i] = numeric_cell(&row, layout.categories[i])
                .map_or(false, |v| v != 0.0);
        }
        records.push(rec);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Brand,Model,Year,Displacement (ccm),Power (hp),Rating,Category_Sport,Category_Touring
Honda,CB500,2004,498.0,57.0,7.0,1,0
Yamaha,MT07,2018,689.0,74.8,7.05,0,1
Kawasaki,Z900,2020,948.0,,n/a,0,0
";

    #[test]
    fn parses_rows_in_file_order() {
        let records = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].display_name(), "Honda CB500");
        assert_eq!(records[2].display_name(), "Kawasaki Z900");
        println!("✓ Parsed {} rows", records.len());
    }

    #[test]
    fn missing_and_malformed_cells_become_none() {
        let records = from_reader(SAMPLE.as_bytes()).unwrap();
        // Kawasaki's empty Power cell and non-numeric Rating.
        assert_eq!(records[2].power_hp, None);
        assert_eq!(records[2].rating, None);
        // Columns absent from this file entirely.
        assert_eq!(records[0].spec(SpecColumn::Torque), None);
        assert_eq!(records[0].rating, Some(7.0));
    }

    #[test]
    fn category_flags_follow_their_columns() {
        let records = from_reader(SAMPLE.as_bytes()).unwrap();
        let sport = CATEGORY_COLUMNS
            .iter()
            .position(|c| *c == "Category_Sport")
            .unwrap();
        assert!(records[0].categories[sport]);
        assert!(records[0].in_any_category());
        assert!(records[1].in_any_category());
        assert!(!records[2].in_any_category());
    }

    #[test]
    fn missing_brand_column_is_a_load_error() {
        let err = from_reader("Model,Year\nCB500,2004\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Brand"), "unexpected error: {err}");
        println!("✓ Missing Brand column rejected");
    }
}
