//! One row of the curated motorcycle dataset and the fixed numeric
//! specification schema shared by both services.

use crate::categories::CATEGORY_COUNT;

/// The ten numeric specification dimensions. Each maps to exactly one
/// dataset column and one HTML form field; the column names carry the
/// units in parentheses and must stay identical to the CSV headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecColumn {
    Year,
    Displacement,
    Power,
    Torque,
    Bore,
    Stroke,
    FuelCapacity,
    DryWeight,
    Wheelbase,
    SeatHeight,
}

impl SpecColumn {
    pub const ALL: [SpecColumn; 10] = [
        SpecColumn::Year,
        SpecColumn::Displacement,
        SpecColumn::Power,
        SpecColumn::Torque,
        SpecColumn::Bore,
        SpecColumn::Stroke,
        SpecColumn::FuelCapacity,
        SpecColumn::DryWeight,
        SpecColumn::Wheelbase,
        SpecColumn::SeatHeight,
    ];

    /// The dataset column header, verbatim.
    pub fn column_name(self) -> &'static str {
        match self {
            SpecColumn::Year => "Year",
            SpecColumn::Displacement => "Displacement (ccm)",
            SpecColumn::Power => "Power (hp)",
            SpecColumn::Torque => "Torque (Nm)",
            SpecColumn::Bore => "Bore (mm)",
            SpecColumn::Stroke => "Stroke (mm)",
            SpecColumn::FuelCapacity => "Fuel capacity (lts)",
            SpecColumn::DryWeight => "Dry weight (kg)",
            SpecColumn::Wheelbase => "Wheelbase (mm)",
            SpecColumn::SeatHeight => "Seat height (mm)",
        }
    }

    /// The HTML form field carrying this dimension.
    pub fn form_field(self) -> &'static str {
        match self {
            SpecColumn::Year => "Year",
            SpecColumn::Displacement => "Displacement",
            SpecColumn::Power => "Power",
            SpecColumn::Torque => "Torque",
            SpecColumn::Bore => "Bore",
            SpecColumn::Stroke => "Stroke",
            SpecColumn::FuelCapacity => "Fuel_capacity",
            SpecColumn::DryWeight => "Dry_weight",
            SpecColumn::Wheelbase => "Wheelbase",
            SpecColumn::SeatHeight => "Seat_height",
        }
    }
}

/// One dataset row. Loaded once at startup and never mutated; a missing or
/// unparseable numeric cell is `None` and never equal to any filter value.
#[derive(Debug, Clone, Default)]
pub struct MotorcycleRecord {
    pub brand: String,
    pub model: String,
    pub year: Option<f64>,
    pub displacement_ccm: Option<f64>,
    pub power_hp: Option<f64>,
    pub torque_nm: Option<f64>,
    pub bore_mm: Option<f64>,
    pub stroke_mm: Option<f64>,
    pub fuel_capacity_lts: Option<f64>,
    pub dry_weight_kg: Option<f64>,
    pub wheelbase_mm: Option<f64>,
    pub seat_height_mm: Option<f64>,
    /// Category membership flags, indexed per `categories::CATEGORY_COLUMNS`.
    /// Rows may belong to several categories at once.
    pub categories: [bool; CATEGORY_COUNT],
    /// Recorded desirability rating; absent in the spec-filter dataset.
    pub rating: Option<f64>,
}

impl MotorcycleRecord {
    /// Value of one numeric specification dimension.
    pub fn spec(&self, col: SpecColumn) -> Option<f64> {
        match col {
            SpecColumn::Year => self.year,
            SpecColumn::Displacement => self.displacement_ccm,
            SpecColumn::Power => self.power_hp,
            SpecColumn::Torque => self.torque_nm,
            SpecColumn::Bore => self.bore_mm,
            SpecColumn::Stroke => self.stroke_mm,
            SpecColumn::FuelCapacity => self.fuel_capacity_lts,
            SpecColumn::DryWeight => self.dry_weight_kg,
            SpecColumn::Wheelbase => self.wheelbase_mm,
            SpecColumn::SeatHeight => self.seat_height_mm,
        }
    }

    pub fn set_spec(&mut self, col: SpecColumn, value: Option<f64>) {
        let slot = match col {
            SpecColumn::Year => &mut self.year,
            SpecColumn::Displacement => &mut self.displacement_ccm,
            SpecColumn::Power => &mut self.power_hp,
            SpecColumn::Torque => &mut self.torque_nm,
            SpecColumn::Bore => &mut self.bore_mm,
            SpecColumn::Stroke => &mut self.stroke_mm,
            SpecColumn::FuelCapacity => &mut self.fuel_capacity_lts,
            SpecColumn::DryWeight => &mut self.dry_weight_kg,
            SpecColumn::Wheelbase => &mut self.wheelbase_mm,
            SpecColumn::SeatHeight => &mut self.seat_height_mm,
        };
        *slot = value;
    }

    /// `"Brand Model"` display string, the shape both result pages list.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// True when at least one category flag is set.
    pub fn in_any_category(&self) -> bool {
        self.categories.iter().any(|&flag| flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_keep_their_units() {
        assert_eq!(SpecColumn::Displacement.column_name(), "Displacement (ccm)");
        assert_eq!(SpecColumn::FuelCapacity.column_name(), "Fuel capacity (lts)");
        assert_eq!(SpecColumn::SeatHeight.column_name(), "Seat height (mm)");
    }

    #[test]
    fn spec_accessors_round_trip() {
        let mut rec = MotorcycleRecord::default();
        for (i, col) in SpecColumn::ALL.into_iter().enumerate() {
            rec.set_spec(col, Some(i as f64 + 0.5));
        }
        for (i, col) in SpecColumn::ALL.into_iter().enumerate() {
            assert_eq!(rec.spec(col), Some(i as f64 + 0.5));
        }
    }

    #[test]
    fn display_name_joins_brand_and_model() {
        let rec = MotorcycleRecord {
            brand: "Honda".into(),
            model: "CB500".into(),
            ..Default::default()
        };
        assert_eq!(rec.display_name(), "Honda CB500");
    }
}
