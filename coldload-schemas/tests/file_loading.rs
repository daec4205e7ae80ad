//! Loading documents and presets from disk

use std::fs;

use coldload_core::rooms::{calculate, RoomInput};
use coldload_core::RoomKind;
use coldload_schemas::{CalculationRequest, PresetRegistry, SchemaError};
use tempfile::TempDir;

#[test]
fn json_and_toml_files_give_the_same_request() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("store.json");
    let toml = dir.path().join("store.toml");
    fs::write(
        &json,
        r#"{"kind": "freezer", "room": {"length": 6}, "product": {"name": "Fish", "daily_load": "800"}}"#,
    )
    .unwrap();
    fs::write(
        &toml,
        "kind = \"freezer\"\n[room]\nlength = 6\n[product]\nname = \"Fish\"\ndaily_load = 800\n",
    )
    .unwrap();

    let a = CalculationRequest::from_path(&json, None).unwrap();
    let b = CalculationRequest::from_path(&toml, None).unwrap();
    assert_eq!(a, b);

    let RoomInput::Freezer(input) = a.into_input() else {
        panic!("expected a freezer");
    };
    assert_eq!(input.daily_load_kg, 800.0);
    assert_eq!(input.geometry.length, 6.0);
}

#[test]
fn kind_argument_allows_untagged_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("untagged.json");
    fs::write(&path, r#"{"conditions": {"batch_hours": 4}}"#).unwrap();

    assert!(CalculationRequest::from_path(&path, None).is_err());

    let request = CalculationRequest::from_path(&path, Some(RoomKind::BlastFreezer)).unwrap();
    let RoomInput::BlastFreezer(input) = request.into_input() else {
        panic!("expected a blast freezer");
    };
    assert_eq!(input.batch_hours, 4.0);
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = CalculationRequest::from_path(&path, None).unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("room.yaml");
    fs::write(&path, "kind: freezer").unwrap();
    assert!(matches!(
        CalculationRequest::from_path(&path, None),
        Err(SchemaError::UnsupportedFormat(_))
    ));
}

#[test]
fn preset_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("walk-in.json"),
        r#"{"description": "Small walk-in", "document": {"kind": "cold-room", "room": {"length": 3, "width": 2.5}}}"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let registry = PresetRegistry::from_dir(dir.path()).unwrap();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["walk-in"]);

    let preset = registry.get("walk-in").unwrap();
    assert_eq!(preset.description, "Small walk-in");
    let report = calculate(&preset.request.into_input()).unwrap();
    assert_eq!(report.kind(), RoomKind::ColdRoom);
}

#[test]
fn broken_preset_in_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
    assert!(matches!(PresetRegistry::from_dir(dir.path()), Err(SchemaError::Json(_))));
}

#[test]
fn kind_argument_must_match_tag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(
        &path,
        r#"{"kind": "cold-room", "conditions": {"people": 20, "lighting_watts": 5000}}"#,
    )
    .unwrap();

    let err = CalculationRequest::from_path(&path, Some(RoomKind::Freezer)).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::KindMismatch { expected: "freezer", found: "cold-room" }
    ));

    let request = CalculationRequest::from_path(&path, Some(RoomKind::ColdRoom)).unwrap();
    let RoomInput::ColdRoom(input) = request.into_input() else {
        panic!("expected a cold room");
    };
    assert_eq!(input.people, 20.0);
    assert_eq!(input.lighting_w, 5000.0);
}

#[test]
fn ignored_room_field_in_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("room.toml");
    fs::write(&path, "kind = \"cold-room\"\n[room]\nfloor_thickness = 50\n").unwrap();

    let err = CalculationRequest::from_path(&path, None).unwrap_err();
    assert!(matches!(err, SchemaError::NotApplicable { .. }));
}
