//! Prepare Districts Integration Tests
//!
//! Runs the compiled binary and checks the public table API end to end.

use std::process::Command;

use district_profiles::{district_names, export, find_district, PREPARED_MESSAGE};

const EXPECTED_DISTRICTS: &[&str] = &[
    "Haveri",
    "Bagalkote",
    "Vijayapura",
    "Uttara Kannada",
    "Belagavi",
    "Dharwad",
    "Gadag",
];

fn run_prepare() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_prepare_districts"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch prepare_districts")
}

#[test]
fn test_prints_exactly_the_confirmation_line() {
    let output = run_prepare();
    assert!(
        output.status.success(),
        "prepare_districts failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{}\n", PREPARED_MESSAGE));
    assert_eq!(
        PREPARED_MESSAGE,
        "New data structure prepared. Use this to update data.json manually or via script."
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run_prepare();
    let second = run_prepare();
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_run_leaves_no_data_json_behind() {
    let dir = std::env::temp_dir().join(format!("prepare_districts_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_prepare_districts"))
        .current_dir(&dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries = std::fs::read_dir(&dir).unwrap().count();
    std::fs::remove_dir_all(&dir).unwrap();
    assert_eq!(entries, 0, "binary wrote into its working directory");
}

#[test]
fn test_table_has_expected_keys() {
    let names: Vec<_> = district_names().collect();
    assert_eq!(names, EXPECTED_DISTRICTS);

    let value = export::prepared_value().unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    let mut expected: Vec<_> = EXPECTED_DISTRICTS.iter().map(|s| s.to_string()).collect();
    keys.sort();
    expected.sort();
    assert_eq!(keys, expected);
}

#[test]
fn test_sample_records() {
    let bagalkote = find_district("Bagalkote").unwrap();
    assert_eq!(bagalkote.historical_places.len(), 5);
    assert_eq!(bagalkote.folk_dances, &["Veeragase"]);

    let belagavi = find_district("belagavi").unwrap();
    assert_eq!(belagavi.culture_festivals.len(), 2);
    assert!(belagavi.geography.contains("monsoon July–Sept"));

    let haveri = find_district("Haveri").unwrap();
    assert_eq!(haveri.notable_personalities, &["Gangubai Hangal — Hindustani vocalist"]);
}
