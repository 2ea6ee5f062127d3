//! End-to-end checks over the CSV loader, feature builder, and both
//! recommendation engines, driven by an in-memory curated dataset.

use moto_core::features::{full_feature_map, ordered_values, supplied_features};
use moto_core::{dataset, filter, similar, SpecColumn, SpecForm};

const DATASET: &str = "\
Brand,Model,Year,Displacement (ccm),Power (hp),Torque (Nm),Bore (mm),Stroke (mm),Fuel capacity (lts),Dry weight (kg),Wheelbase (mm),Seat height (mm),Rating,Category_Sport,Category_Touring,Category_Naked bike
Honda,CB500,2004,498.0,57.0,43.0,73.0,59.6,19.0,173.0,1420.0,775.0,7.0,1,0,0
Yamaha,MT07,2018,689.0,74.8,68.0,80.0,68.6,14.0,164.0,1400.0,805.0,7.05,0,0,1
Kawasaki,Z900,2020,948.0,125.0,98.6,73.4,56.0,17.0,,1450.0,795.0,8.5,1,0,1
Suzuki,Burgman,2015,400.0,33.0,36.0,81.0,77.6,13.5,218.0,1580.0,755.0,,0,1,0
";

fn load() -> Vec<moto_core::MotorcycleRecord> {
    dataset::from_reader(DATASET.as_bytes()).expect("sample dataset should parse")
}

#[test]
fn blank_form_lists_the_whole_dataset_in_order() {
    let records = load();
    let form = SpecForm::default();
    let features = supplied_features(&form).unwrap();
    let names = filter::recommend(&records, &features, form.category());

    assert_eq!(
        names,
        vec!["Honda CB500", "Yamaha MT07", "Kawasaki Z900", "Suzuki Burgman"]
    );
    println!("✓ Blank request returned all {} rows", names.len());
}

#[test]
fn form_values_filter_conjunctively() {
    let records = load();
    let form = SpecForm {
        year: Some("2018".into()),
        displacement: Some("689.0".into()),
        ..Default::default()
    };
    let features = supplied_features(&form).unwrap();
    let names = filter::recommend(&records, &features, form.category());
    assert_eq!(names, vec!["Yamaha MT07"]);
}

#[test]
fn off_dataset_value_yields_a_silent_empty_result() {
    let records = load();
    let form = SpecForm {
        power: Some("9999".into()),
        ..Default::default()
    };
    let features = supplied_features(&form).unwrap();
    let names = filter::recommend(&records, &features, form.category());
    assert!(names.is_empty());
}

#[test]
fn a_row_round_trips_through_its_own_spec() {
    // Reflexivity: feed a row's recorded values back as form input and the
    // exact-filter engine must return that row.
    let records = load();
    let yamaha = &records[1];

    let form = SpecForm {
        year: Some("2018".into()),
        displacement: Some("689.0".into()),
        power: Some("74.8".into()),
        torque: Some("68.0".into()),
        bore: Some("80.0".into()),
        stroke: Some("68.6".into()),
        fuel_capacity: Some("14.0".into()),
        dry_weight: Some("164.0".into()),
        wheelbase: Some("1400.0".into()),
        seat_height: Some("805.0".into()),
        category: None,
    };
    let features = supplied_features(&form).unwrap();
    assert_eq!(features.len(), SpecColumn::ALL.len());

    let names = filter::recommend(&records, &features, form.category());
    assert_eq!(names, vec![yamaha.display_name()]);
    println!("✓ {} matched its own specification", yamaha.display_name());
}

#[test]
fn category_request_keeps_rows_with_any_flag() {
    let records = load();
    // Suzuki only carries the Touring flag, yet a "Sport" request keeps it:
    // the gate tests membership in some category, not the named one.
    let names = filter::recommend(&records, &[], Some("Sport"));
    assert_eq!(
        names,
        vec!["Honda CB500", "Yamaha MT07", "Kawasaki Z900", "Suzuki Burgman"]
    );
}

#[test]
fn predicted_rating_pipeline_selects_and_orders_neighbors() {
    let records = load();
    let picks = similar::similar_by_rating(&records, 7.02);

    let summary: Vec<(String, f64)> = picks
        .iter()
        .map(|p| (format!("{} {}", p.brand, p.model), p.rating))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Honda CB500".to_string(), 7.0),
            ("Yamaha MT07".to_string(), 7.05),
        ]
    );
    // Kawasaki is 1.48 away; Suzuki has no usable rating cell.
    println!("✓ Neighbor selection: {summary:?}");
}

#[test]
fn model_input_vector_follows_the_artifact_order() {
    let form = SpecForm {
        displacement: Some("498".into()),
        category: Some("Naked bike".into()),
        ..Default::default()
    };
    let map = full_feature_map(&form).unwrap();

    let feat_list: Vec<String> = vec![
        "Year".into(),
        "Displacement (ccm)".into(),
        "Category_Naked bike".into(),
        "Category_Sport".into(),
    ];
    let vec = ordered_values(&map, &feat_list);
    assert_eq!(vec, vec![0.0, 498.0, 1.0, 0.0]);
    println!("✓ Ordered vector: {vec:?}");
}

#[test]
fn non_numeric_input_surfaces_the_offending_field() {
    let form = SpecForm {
        year: Some("abc".into()),
        ..Default::default()
    };
    let err = full_feature_map(&form).unwrap_err();
    assert!(err.to_string().contains("Year"));
    assert!(err.to_string().contains("abc"));
}
