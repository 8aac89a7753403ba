// src/export/model.rs

use crate::models::Transaction;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// An ordered, named-column result table, ready for rendering or export.
/// Cells are already formatted strings; numeric cells are re-sniffed where a
/// format needs typed values (XLSX, JSON).
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(title: impl Into<String>, headers: Vec<&'static str>) -> Self {
        Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// JSON array of one object per row, keyed by header. Cells that parse
    /// as numbers export as numbers.
    pub fn to_json(&self) -> Value {
        let objects: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (header, cell) in self.headers.iter().zip(row) {
                    obj.insert(header.to_string(), cell_to_json(cell));
                }
                Value::Object(obj)
            })
            .collect();

        Value::Array(objects)
    }
}

fn cell_to_json(cell: &str) -> Value {
    if let Ok(n) = cell.parse::<i64>() {
        return json!(n);
    }
    if let Ok(f) = cell.parse::<f64>() {
        return json!(f);
    }
    Value::String(cell.to_string())
}

/// Flat transaction record for serde-based exports. Field names are renamed
/// to the dataset's own header spelling, so an exported CSV loads back
/// through the regular loader.
#[derive(Serialize, Clone, Debug)]
pub struct TransactionExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Store_Type")]
    pub store_type: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Payment_Method")]
    pub payment_method: String,
    #[serde(rename = "Discount_Applied")]
    pub discount_applied: bool,
    #[serde(rename = "Total_Items")]
    pub total_items: u32,
    #[serde(rename = "Promotion")]
    pub promotion: String,
}

impl From<&Transaction> for TransactionExport {
    fn from(t: &Transaction) -> Self {
        Self {
            date: t.date_str(),
            store_type: t.store_type.clone(),
            season: t.season.label().to_string(),
            city: t.city.clone(),
            amount: t.amount,
            payment_method: t.payment_method.clone(),
            discount_applied: t.discount_applied,
            total_items: t.total_items,
            promotion: t.promotion.clone(),
        }
    }
}

pub(crate) fn transaction_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Store_Type",
        "Season",
        "City",
        "Amount",
        "Payment_Method",
        "Discount_Applied",
        "Total_Items",
        "Promotion",
    ]
}

pub(crate) fn transaction_to_row(t: &Transaction) -> Vec<String> {
    vec![
        t.date_str(),
        t.store_type.clone(),
        t.season.label().to_string(),
        t.city.clone(),
        format!("{}", t.amount),
        t.payment_method.clone(),
        t.discount_applied.to_string(),
        t.total_items.to_string(),
        t.promotion.clone(),
    ]
}

/// Transactions as a generic report table (XLSX / PDF path).
pub(crate) fn transactions_to_table(title: &str, rows: &[Transaction]) -> ReportTable {
    let mut table = ReportTable::new(title, transaction_headers());
    for t in rows {
        table.push_row(transaction_to_row(t));
    }
    table
}
