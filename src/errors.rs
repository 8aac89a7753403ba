//! Unified application error type.
//! All modules (data, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Dataset loading
    // ---------------------------
    #[error("Dataset file not found: {0}")]
    DatasetNotFound(String),

    #[error("Unsupported dataset format: {0} (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("Spreadsheet error: {0}")]
    Sheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column missing: {0}")]
    MissingColumn(String),

    #[error("Dataset contains no transaction rows")]
    EmptyDataset,

    // ---------------------------
    // Row validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unknown season label: {0}")]
    InvalidSeason(String),

    #[error("Invalid discount flag: {0}")]
    InvalidDiscount(String),

    #[error("Invalid transaction amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid item count: {0}")]
    InvalidItems(String),

    // ---------------------------
    // Filter errors
    // ---------------------------
    #[error("Invalid amount range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
