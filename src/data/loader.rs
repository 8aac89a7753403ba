//! Dataset ingestion: CSV or XLSX (first sheet only), columns resolved by
//! header name.

use crate::data::dataset::Dataset;
use crate::data::validate;
use crate::errors::{AppError, AppResult};
use crate::models::Transaction;
use crate::utils::path::expand_tilde;
use calamine::{Reader, Xlsx, open_workbook};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Date",
    "Store_Type",
    "Season",
    "Amount",
    "Payment_Method",
    "City",
    "Discount_Applied",
    "Total_Items",
    "Promotion",
];

/// Column indexes resolved from the header row.
pub(crate) struct ColumnMap {
    pub date: usize,
    pub store_type: usize,
    pub season: usize,
    pub amount: usize,
    pub payment_method: usize,
    pub city: usize,
    pub discount: usize,
    pub items: usize,
    pub promotion: usize,
}

impl ColumnMap {
    fn resolve(headers: &[String]) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &'static str| find(name).ok_or_else(|| AppError::MissingColumn(name.into()));

        // The original spreadsheet export spells the amount column "Amount($)".
        let amount = find("Amount")
            .or_else(|| find("Amount($)"))
            .ok_or_else(|| AppError::MissingColumn("Amount".into()))?;

        Ok(ColumnMap {
            date: require("Date")?,
            store_type: require("Store_Type")?,
            season: require("Season")?,
            amount,
            payment_method: require("Payment_Method")?,
            city: require("City")?,
            discount: require("Discount_Applied")?,
            items: require("Total_Items")?,
            promotion: require("Promotion")?,
        })
    }
}

/// Load and validate the transaction dataset at `path`.
/// The format is chosen by file extension.
pub fn load_dataset(path: &str) -> AppResult<Dataset> {
    let path = expand_tilde(path);

    if !path.exists() {
        return Err(AppError::DatasetNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let rows = match ext.as_str() {
        "csv" => read_csv(&path)?,
        "xlsx" | "xlsm" => read_xlsx(&path)?,
        _ => return Err(AppError::UnsupportedFormat(path.display().to_string())),
    };

    Dataset::new(rows)
}

fn read_csv(path: &Path) -> AppResult<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let cols = ColumnMap::resolve(&headers)?;

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let fields: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        // Data rows are 1-based and follow the header line.
        rows.push(validate::parse_row(i + 2, &cols, &fields)?);
    }

    Ok(rows)
}

fn read_xlsx(path: &Path) -> AppResult<Vec<Transaction>> {
    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path)
        .map_err(|e| AppError::Sheet(format!("cannot open workbook: {e}")))?;

    // First sheet only.
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Sheet("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| AppError::Sheet(format!("cannot read sheet '{sheet}': {e}")))?;

    let mut sheet_rows = range.rows();
    let header_row = sheet_rows.next().ok_or(AppError::EmptyDataset)?;
    let headers: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();
    let cols = ColumnMap::resolve(&headers)?;

    let mut rows = Vec::new();
    for (i, row) in sheet_rows.enumerate() {
        let fields: Vec<String> = row.iter().map(|c| c.to_string()).collect();

        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        rows.push(validate::parse_row(i + 2, &cols, &fields)?);
    }

    Ok(rows)
}
