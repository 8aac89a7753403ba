use super::season::Season;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A single retail transaction row, immutable after load.
///
/// The month is never stored: it is always derived from `date`, so the two
/// can never disagree.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub store_type: String,
    pub season: Season,
    pub city: String,
    pub amount: f64,
    pub payment_method: String,
    pub discount_applied: bool,
    pub total_items: u32,
    pub promotion: String,
}

impl Transaction {
    /// Calendar month of the transaction, 1..=12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
