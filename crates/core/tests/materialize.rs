use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tabbar_icons_core::payload::{decode_payload, BLUE_ICON, GRAY_ICON};
use tabbar_icons_core::{
    ensure_directory, materialize_icons, write_icon_file, IconRole, MaterializeConfig,
    MaterializeError,
};
use tempfile::TempDir;

const EXPECTED_FILES: [&str; 8] = [
    "home.png",
    "home_active.png",
    "property.png",
    "property_active.png",
    "contract.png",
    "contract_active.png",
    "profile.png",
    "profile_active.png",
];

fn list_files(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect()
}

fn gray() -> Vec<u8> {
    decode_payload(IconRole::Inactive, GRAY_ICON).expect("gray payload")
}

fn blue() -> Vec<u8> {
    decode_payload(IconRole::Active, BLUE_ICON).expect("blue payload")
}

#[test]
fn creates_missing_leaf_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("images").join("tabbar");
    assert!(!target.exists());

    materialize_icons(&MaterializeConfig::tabbar(&target)).expect("materialize");

    assert!(target.is_dir());
}

#[test]
fn writes_exactly_the_eight_tab_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("tabbar");

    let report = materialize_icons(&MaterializeConfig::tabbar(&target)).expect("materialize");

    let expected: BTreeSet<String> = EXPECTED_FILES.iter().map(|s| s.to_string()).collect();
    assert_eq!(list_files(&target), expected);
    let reported: Vec<&str> = report.files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(reported, EXPECTED_FILES);
}

#[test]
fn file_contents_match_their_role_payload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("tabbar");
    materialize_icons(&MaterializeConfig::tabbar(&target)).expect("materialize");

    let (gray, blue) = (gray(), blue());
    assert_ne!(gray, blue);
    for name in EXPECTED_FILES {
        let bytes = fs::read(target.join(name)).expect("read icon");
        if name.ends_with("_active.png") {
            assert_eq!(bytes, blue, "{name}");
        } else {
            assert_eq!(bytes, gray, "{name}");
        }
    }
}

#[test]
fn second_run_produces_identical_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("tabbar");
    let cfg = MaterializeConfig::tabbar(&target);

    materialize_icons(&cfg).expect("first run");
    let first: Vec<Vec<u8>> = EXPECTED_FILES
        .iter()
        .map(|n| fs::read(target.join(n)).expect("read icon"))
        .collect();

    materialize_icons(&cfg).expect("second run");
    let second: Vec<Vec<u8>> = EXPECTED_FILES
        .iter()
        .map(|n| fs::read(target.join(n)).expect("read icon"))
        .collect();

    assert_eq!(first, second);
    assert_eq!(list_files(&target).len(), EXPECTED_FILES.len());
}

#[test]
fn existing_icon_is_overwritten() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("tabbar");
    fs::create_dir_all(&target).expect("create dir");
    fs::write(target.join("home.png"), vec![0xAB; 4096]).expect("seed stale icon");

    materialize_icons(&MaterializeConfig::tabbar(&target)).expect("materialize");

    assert_eq!(fs::read(target.join("home.png")).expect("read icon"), gray());
}

#[test]
fn regular_file_at_target_is_fatal_and_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("tabbar");
    fs::write(&target, b"not a directory").expect("seed file");

    let err = materialize_icons(&MaterializeConfig::tabbar(&target)).unwrap_err();

    match &err {
        MaterializeError::Io { op, path, .. } => {
            assert_eq!(*op, "create directory");
            assert_eq!(path, &target);
        }
        other => panic!("expected Io error, got {other}"),
    }
    assert_eq!(fs::read(&target).expect("read file"), b"not a directory");
    assert_eq!(list_files(temp_dir.path()).len(), 1);
}

#[test]
fn ensure_directory_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("a").join("b");

    ensure_directory(&target).expect("first ensure");
    ensure_directory(&target).expect("second ensure");

    assert!(target.is_dir());
}

#[test]
fn write_into_missing_directory_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing");

    let err = write_icon_file(&missing, "home.png", b"x").unwrap_err();

    assert!(matches!(err, MaterializeError::Io { op: "create file", .. }));
    assert!(err.to_string().contains("home.png"));
}

#[test]
fn report_serializes_roles_in_snake_case() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report =
        materialize_icons(&MaterializeConfig::tabbar(temp_dir.path())).expect("materialize");

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["files"][0]["role"], "inactive");
    assert_eq!(json["files"][1]["role"], "active");
    assert_eq!(json["files"][1]["file_name"], "home_active.png");
}
