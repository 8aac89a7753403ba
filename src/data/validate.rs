//! Per-row parsing and validation. A dataset that gets past this module is
//! guaranteed non-negative amounts and item counts, known season labels and
//! derivable months, so every aggregation downstream is infallible.

use crate::data::loader::ColumnMap;
use crate::errors::{AppError, AppResult};
use crate::models::{Season, Transaction};
use crate::utils::date::parse_flexible_date;

pub(crate) fn parse_row(line: usize, cols: &ColumnMap, fields: &[String]) -> AppResult<Transaction> {
    let field = |idx: usize| fields.get(idx).map(|s| s.trim()).unwrap_or("");

    let raw_date = field(cols.date);
    let date = parse_flexible_date(raw_date)
        .ok_or_else(|| AppError::InvalidDate(format!("row {line}: '{raw_date}'")))?;

    let raw_season = field(cols.season);
    let season = Season::from_label(raw_season)
        .ok_or_else(|| AppError::InvalidSeason(format!("row {line}: '{raw_season}'")))?;

    let amount = parse_amount(line, field(cols.amount))?;
    let discount_applied = parse_flag(line, field(cols.discount))?;
    let total_items = parse_items(line, field(cols.items))?;

    Ok(Transaction {
        date,
        store_type: field(cols.store_type).to_string(),
        season,
        city: field(cols.city).to_string(),
        amount,
        payment_method: field(cols.payment_method).to_string(),
        discount_applied,
        total_items,
        promotion: field(cols.promotion).to_string(),
    })
}

/// Amounts are currency values: finite and non-negative.
fn parse_amount(line: usize, s: &str) -> AppResult<f64> {
    let value: f64 = s
        .parse()
        .map_err(|_| AppError::InvalidAmount(format!("row {line}: '{s}'")))?;

    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidAmount(format!("row {line}: '{s}'")));
    }

    Ok(value)
}

/// Item counts come out of spreadsheets as "5" or "5.0"; both are accepted,
/// fractional or negative counts are not.
fn parse_items(line: usize, s: &str) -> AppResult<u32> {
    let value: f64 = s
        .parse()
        .map_err(|_| AppError::InvalidItems(format!("row {line}: '{s}'")))?;

    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(AppError::InvalidItems(format!("row {line}: '{s}'")));
    }

    Ok(value as u32)
}

/// Boolean-ish spellings used by spreadsheet exports.
fn parse_flag(line: usize, s: &str) -> AppResult<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(AppError::InvalidDiscount(format!("row {line}: '{s}'"))),
    }
}
