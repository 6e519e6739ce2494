//! FILENAME: tests/test_cli.rs
//! End-to-end runs of the command line entry point against temp files.

use std::fs;

use app_lib::{generate, run, AppError, Cli};
use clap::Parser;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["ratio-tables"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_run_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tables.html");

    let cli = parse(&["-t", "storage", "-o", out.to_str().unwrap()]);
    run(&cli).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<table id=\"storage\">"));
    assert!(!html.contains("belt-throughput"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("tables.json");
    fs::write(&config, r#"{ "storage_slots": [2], "storage_stack_size": 50 }"#).unwrap();

    let cli = parse(&["-f", "json", "-t", "storage", "-c", config.to_str().unwrap()]);
    let document = generate(&cli).unwrap();

    let tables: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(tables[0]["row_count"], 2);
    // 2 wooden chests x 16 slots x 50 items
    assert_eq!(tables[0]["cells"][1][1]["value"], 1600.0);
}

#[test]
fn test_custom_game_data_file() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(
        &data,
        r#"{
            "items": [ { "name": "transport-belt", "stack_size": 100 } ],
            "belts": [ { "name": "transport-belt", "throughput": 13.33 } ]
        }"#,
    )
    .unwrap();

    let cli = parse(&["-f", "text", "-t", "belt-throughput", "-d", data.to_str().unwrap()]);
    let document = generate(&cli).unwrap();
    assert!(document.contains("6.67"));
    assert!(document.contains("13.33"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let cli = parse(&["-c", missing.to_str().unwrap()]);
    assert!(matches!(generate(&cli), Err(AppError::Io(_))));
}
