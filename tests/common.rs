#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("storelens")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the shared sample dataset as CSV and return its path.
///
/// The numbers are chosen so the aggregates are easy to check by hand:
/// - 12 rows, total amount 1610, mean 134.1666…
/// - high-value rows (> mean): 200, 300, 400, 150, 250
/// - Chicago's high-value payment counts tie (Card 1, Cash 1; Card first)
/// - discounted and non-discounted totals are 810 and 800
/// - items means: Houston 17/3, Chicago 21/4, Miami 3, Dallas 1
pub fn write_sample_dataset(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_transactions.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();

    let csv = "\
Date,Store_Type,Season,Amount,Payment_Method,City,Discount_Applied,Total_Items,Promotion
2024-01-10,Grocery,Winter,100.0,Cash,Chicago,False,5,None
2024-01-20,Grocery,Winter,200.0,Card,Chicago,True,3,BOGO
2024-02-05,Electronics,Winter,300.0,Mobile,Houston,False,2,None
2024-03-03,Grocery,Spring,30.0,Cash,Dallas,False,1,None
2024-03-04,Grocery,Spring,40.0,Card,Dallas,True,1,Discount
2024-04-12,Grocery,Spring,10.0,Cash,Miami,False,1,Discount
2024-04-15,Grocery,Spring,20.0,Cash,Miami,True,2,Discount
2024-06-01,Electronics,Summer,400.0,Mobile,Houston,True,8,BOGO
2024-06-20,Clothing,Summer,50.0,Card,Chicago,False,4,None
2024-09-10,Clothing,Fall,60.0,Card,Miami,False,6,BOGO
2024-09-15,Clothing,Fall,150.0,Mobile,Houston,True,7,Discount
2024-11-02,Grocery,Fall,250.0,Cash,Chicago,False,9,None
";

    fs::write(&p, csv).expect("write sample dataset");
    p
}

/// Same rows, but with the original spreadsheet's "Amount($)" header.
pub fn write_sample_dataset_amount_alias(name: &str) -> String {
    let p = write_sample_dataset(name);
    let content = fs::read_to_string(&p).expect("read sample dataset");
    fs::write(&p, content.replacen("Amount,", "Amount($),", 1)).expect("rewrite header");
    p
}
