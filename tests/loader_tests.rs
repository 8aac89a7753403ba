//! Library-level tests of dataset loading and validation.

mod common;
use common::{write_sample_dataset, write_sample_dataset_amount_alias};
use std::env;
use std::fs;
use std::path::PathBuf;
use storelens::data::load_dataset;
use storelens::errors::AppError;
use storelens::models::Season;

fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_loader.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write csv");
    p
}

#[test]
fn loads_sample_dataset_and_derives_scalars() {
    let data = write_sample_dataset("loader_ok");
    let dataset = load_dataset(&data).expect("load sample dataset");

    assert_eq!(dataset.len(), 12);
    assert!((dataset.mean_amount() - 1610.0 / 12.0).abs() < 1e-9);
    assert_eq!(dataset.amount_bounds(), (10, 400));

    let (first, last) = dataset.date_range();
    assert_eq!(first.to_string(), "2024-01-10");
    assert_eq!(last.to_string(), "2024-11-02");

    // Distinct values come back in first-seen row order.
    assert_eq!(
        dataset.cities(),
        vec!["Chicago", "Houston", "Dallas", "Miami"]
    );
    assert_eq!(
        dataset.seasons(),
        vec![Season::Winter, Season::Spring, Season::Summer, Season::Fall]
    );
}

#[test]
fn accepts_original_amount_header_spelling() {
    let data = write_sample_dataset_amount_alias("loader_alias");
    let dataset = load_dataset(&data).expect("load with Amount($) header");

    assert_eq!(dataset.len(), 12);
    assert_eq!(dataset.amount_bounds(), (10, 400));
}

#[test]
fn missing_required_column_is_reported_by_name() {
    let data = write_csv(
        "loader_missing_col",
        "Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items\n\
         2024-01-10,Grocery,Winter,100.0,Cash,Chicago,False,5\n",
    );

    let err = load_dataset(&data).expect_err("missing Promotion column must fail");
    match err {
        AppError::MissingColumn(name) => assert_eq!(name, "Promotion"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_amount_is_rejected_with_row_context() {
    let data = write_csv(
        "loader_negative_amount",
        "Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items,Promotion\n\
         2024-01-10,Grocery,Winter,-5.0,Cash,Chicago,False,5,None\n",
    );

    let err = load_dataset(&data).expect_err("negative amount must fail");
    match err {
        AppError::InvalidAmount(msg) => assert!(msg.contains("row 2")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fractional_item_count_is_rejected() {
    let data = write_csv(
        "loader_bad_items",
        "Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items,Promotion\n\
         2024-01-10,Grocery,Winter,5.0,Cash,Chicago,False,2.5,None\n",
    );

    let err = load_dataset(&data).expect_err("fractional items must fail");
    assert!(matches!(err, AppError::InvalidItems(_)));
}

#[test]
fn unparseable_date_is_rejected() {
    let data = write_csv(
        "loader_bad_date",
        "Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items,Promotion\n\
         not-a-date,Grocery,Winter,5.0,Cash,Chicago,False,2,None\n",
    );

    let err = load_dataset(&data).expect_err("bad date must fail");
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn unknown_season_is_rejected() {
    let data = write_csv(
        "loader_bad_season",
        "Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items,Promotion\n\
         2024-01-10,Grocery,Monsoon,5.0,Cash,Chicago,False,2,None\n",
    );

    let err = load_dataset(&data).expect_err("bad season must fail");
    assert!(matches!(err, AppError::InvalidSeason(_)));
}

#[test]
fn discount_flag_accepts_boolean_spellings() {
    let data = write_csv(
        "loader_flags",
        "Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items,Promotion\n\
         2024-01-10,Grocery,Winter,5.0,Cash,Chicago,TRUE,2,None\n\
         2024-01-11,Grocery,Winter,5.0,Cash,Chicago,no,2,None\n\
         2024-01-12,Grocery,Winter,5.0,Cash,Chicago,1,2,None\n",
    );

    let dataset = load_dataset(&data).expect("boolean spellings load");
    let flags: Vec<bool> = dataset.rows().iter().map(|t| t.discount_applied).collect();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn empty_dataset_is_an_error() {
    let data = write_csv(
        "loader_empty",
        "Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items,Promotion\n",
    );

    let err = load_dataset(&data).expect_err("empty dataset must fail");
    assert!(matches!(err, AppError::EmptyDataset));
}

#[test]
fn missing_file_and_unknown_extension_are_reported() {
    let err = load_dataset("/definitely/not/here.csv").expect_err("missing file");
    assert!(matches!(err, AppError::DatasetNotFound(_)));

    let data = write_csv("loader_ext", "whatever");
    let renamed = data.replace(".csv", ".txt");
    fs::rename(&data, &renamed).expect("rename");

    let err = load_dataset(&renamed).expect_err("unknown extension");
    assert!(matches!(err, AppError::UnsupportedFormat(_)));
}
