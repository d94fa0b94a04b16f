//! Dataset loading through the public API: bundled data, files on disk and
//! load-time validation.

use epochline::model::{DatasetBounds, DatasetError, Era, EventId};
use epochline::parser::parse_dataset;
use epochline::source::{detect_dataset_source, DatasetSource};
use std::io::Write;
use std::path::PathBuf;

fn record(id: u32, year: i64, era: &str) -> String {
    format!(
        r#"{{"id": {id}, "year": {year}, "era": "{era}", "title": "Event {id}",
            "date": "{year}", "location": "Here", "description": "Something happened"}}"#
    )
}

fn dataset_json(records: &[String]) -> String {
    format!("[{}]", records.join(","))
}

#[test]
fn bundled_dataset_loads_and_is_sorted() {
    let dataset = DatasetSource::Bundled
        .load(DatasetBounds::default())
        .unwrap();

    assert!(dataset.len() >= 20);
    let years: Vec<i64> = dataset.events().iter().map(|event| event.year).collect();
    assert!(years.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn bundled_dataset_covers_every_era() {
    let dataset = DatasetSource::Bundled
        .load(DatasetBounds::default())
        .unwrap();

    for era in Era::ALL {
        assert!(
            dataset.events().iter().any(|event| event.era == era),
            "no events for {era}"
        );
    }
}

#[test]
fn no_path_selects_bundled_dataset() {
    assert_eq!(detect_dataset_source(None), DatasetSource::Bundled);
    assert_eq!(
        detect_dataset_source(Some(PathBuf::from("events.json"))),
        DatasetSource::File(PathBuf::from("events.json"))
    );
}

#[test]
fn dataset_file_loads_from_disk() {
    let dir = std::env::temp_dir().join(format!("epochline-dataset-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("events.json");
    let mut file = std::fs::File::create(&path).unwrap();
    let json = dataset_json(&[
        record(2, 1200, "Post-Classical History"),
        record(1, -500, "Classical Antiquity"),
    ]);
    file.write_all(json.as_bytes()).unwrap();

    let dataset = DatasetSource::File(path.clone())
        .load(DatasetBounds::default())
        .unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let ids: Vec<EventId> = dataset.events().iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![EventId::new(1), EventId::new(2)]);
}

#[test]
fn missing_file_is_reported() {
    let path = PathBuf::from("/definitely/not/here/events.json");

    let result = DatasetSource::File(path.clone()).load(DatasetBounds::default());

    assert!(matches!(result, Err(DatasetError::FileNotFound { path: p }) if p == path));
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = dataset_json(&[
        record(7, -500, "Classical Antiquity"),
        record(7, 1200, "Post-Classical History"),
    ]);

    let result = parse_dataset(&json, DatasetBounds::default());

    assert!(matches!(result, Err(DatasetError::DuplicateId { id }) if id == EventId::new(7)));
}

#[test]
fn out_of_range_year_is_rejected() {
    let json = dataset_json(&[record(1, 2100, "Contemporary History")]);

    let result = parse_dataset(&json, DatasetBounds::default());

    assert!(matches!(
        result,
        Err(DatasetError::YearOutOfBounds { year: 2100, .. })
    ));
}

#[test]
fn unknown_era_is_rejected() {
    let json = dataset_json(&[record(1, -2000, "Bronze Age")]);

    let result = parse_dataset(&json, DatasetBounds::default());

    assert!(matches!(result, Err(DatasetError::Parse { .. })));
}

#[test]
fn empty_dataset_is_rejected() {
    let result = parse_dataset("[]", DatasetBounds::default());

    assert!(matches!(result, Err(DatasetError::Empty)));
}

#[test]
fn narrower_bounds_reject_bundled_events() {
    let bounds = DatasetBounds::new(0, 2024).unwrap();

    let result = DatasetSource::Bundled.load(bounds);

    assert!(matches!(result, Err(DatasetError::YearOutOfBounds { .. })));
}
