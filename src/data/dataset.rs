//! The validated, immutable transaction table plus the handful of scalars
//! derived from it exactly once at load time.

use crate::errors::{AppError, AppResult};
use crate::models::{Season, Transaction};
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug)]
pub struct Dataset {
    rows: Vec<Transaction>,
    mean_amount: f64,
    amount_bounds: (i64, i64),
}

impl Dataset {
    pub fn new(rows: Vec<Transaction>) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(AppError::EmptyDataset);
        }

        let total: f64 = rows.iter().map(|t| t.amount).sum();
        let mean_amount = total / rows.len() as f64;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for t in &rows {
            min = min.min(t.amount);
            max = max.max(t.amount);
        }

        Ok(Dataset {
            rows,
            mean_amount,
            // Integer-truncated bounds, the way the original range slider
            // presented them.
            amount_bounds: (min.trunc() as i64, max.trunc() as i64),
        })
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean amount over the whole table. This is the single global scalar
    /// that defines "high-value" transactions.
    pub fn mean_amount(&self) -> f64 {
        self.mean_amount
    }

    /// Truncated (min, max) of the amount column.
    pub fn amount_bounds(&self) -> (i64, i64) {
        self.amount_bounds
    }

    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let mut first = self.rows[0].date;
        let mut last = self.rows[0].date;
        for t in &self.rows {
            first = first.min(t.date);
            last = last.max(t.date);
        }
        (first, last)
    }

    pub fn store_types(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|t| t.store_type.as_str()))
    }

    pub fn cities(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|t| t.city.as_str()))
    }

    pub fn payment_methods(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|t| t.payment_method.as_str()))
    }

    pub fn promotions(&self) -> Vec<String> {
        distinct(self.rows.iter().map(|t| t.promotion.as_str()))
    }

    pub fn seasons(&self) -> Vec<Season> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for t in &self.rows {
            if seen.insert(t.season) {
                out.push(t.season);
            }
        }
        out
    }
}

/// Distinct values in first-seen row order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}
