//! CLI export tests across formats and views.

mod common;
use common::{sl, temp_out, write_sample_dataset};
use std::fs;

#[test]
fn test_export_transactions_csv_roundtrips_headers() {
    let data = write_sample_dataset("export_tx_csv");
    let out = temp_out("export_tx_csv", "csv");

    sl().args([
        "--data", &data, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    // serde renames give the dataset's own header spelling back.
    assert!(content.starts_with("Date,Store_Type,Season,City,Amount"));
    assert!(content.contains("2024-01-10"));
    assert!(content.contains("Chicago"));

    // The exported CSV loads back through the regular loader.
    let reloaded = storelens::data::load_dataset(&out).expect("reload exported csv");
    assert_eq!(reloaded.len(), 12);
}

#[test]
fn test_export_transactions_filtered_csv() {
    let data = write_sample_dataset("export_tx_filtered");
    let out = temp_out("export_tx_filtered", "csv");

    sl().args([
        "--data",
        &data,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--city",
        "Houston",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Houston"));
    assert!(!content.contains("Chicago"));
}

#[test]
fn test_export_store_season_json() {
    let data = write_sample_dataset("export_q1_json");
    let out = temp_out("export_q1_json", "json");

    sl().args([
        "--data", &data, "--test", "export", "--format", "json", "--file", &out, "--view", "q1",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = parsed.as_array().expect("array of rows");
    assert_eq!(rows.len(), 7);

    // Numeric cells export as numbers, not strings.
    let first = &rows[0];
    assert!(first["Average Transaction Amount ($)"].is_number());
    assert_eq!(first["Store Type"], "Clothing");
    assert_eq!(first["Season"], "Fall");
}

#[test]
fn test_export_payments_csv() {
    let data = write_sample_dataset("export_q2_csv");
    let out = temp_out("export_q2_csv", "csv");

    sl().args([
        "--data", &data, "--test", "export", "--format", "csv", "--file", &out, "--view",
        "payments",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("City,Payment Method,Count"));
    assert!(content.contains("Houston,Mobile,3"));
}

#[test]
fn test_export_discounts_xlsx() {
    let data = write_sample_dataset("export_q3_xlsx");
    let out = temp_out("export_q3_xlsx", "xlsx");

    sl().args([
        "--data", &data, "--test", "export", "--format", "xlsx", "--file", &out, "--view", "q3",
    ])
    .assert()
    .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_promotions_pdf() {
    let data = write_sample_dataset("export_q5_pdf");
    let out = temp_out("export_q5_pdf", "pdf");

    sl().args([
        "--data", &data, "--test", "export", "--format", "pdf", "--file", &out, "--view", "q5",
    ])
    .assert()
    .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_refuses_relative_paths() {
    let data = write_sample_dataset("export_relative");

    sl().args([
        "--data",
        &data,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        "relative_out.csv",
    ])
    .assert()
    .failure()
    .stderr(predicates::str::contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let data = write_sample_dataset("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("pre-existing file");

    sl().args([
        "--data", &data, "--test", "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("old content"));
}
