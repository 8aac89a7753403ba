// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{
    export_csv_records, export_csv_table, export_json_records, export_json_table,
};
use crate::export::model::{ReportTable, TransactionExport, transactions_to_table};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::Transaction;
use std::path::Path;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one aggregated report table.
    pub fn export_table(
        table: &ReportTable,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = checked_path(file, force)?;

        match format {
            ExportFormat::Csv => export_csv_table(table, path)?,
            ExportFormat::Json => export_json_table(table, path)?,
            ExportFormat::Xlsx => export_xlsx(table, path)?,
            ExportFormat::Pdf => export_pdf(table, path)?,
        }

        Ok(())
    }

    /// Export raw (optionally filtered) transaction rows. CSV and JSON go
    /// through serde so the CSV loads back through the regular loader;
    /// XLSX and PDF share the table writers.
    pub fn export_transactions(
        title: &str,
        rows: &[Transaction],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = checked_path(file, force)?;

        match format {
            ExportFormat::Csv => {
                let records: Vec<TransactionExport> =
                    rows.iter().map(TransactionExport::from).collect();
                export_csv_records(&records, path)?;
            }
            ExportFormat::Json => {
                let records: Vec<TransactionExport> =
                    rows.iter().map(TransactionExport::from).collect();
                export_json_records(&records, path)?;
            }
            ExportFormat::Xlsx => export_xlsx(&transactions_to_table(title, rows), path)?,
            ExportFormat::Pdf => export_pdf(&transactions_to_table(title, rows), path)?,
        }

        Ok(())
    }
}

fn checked_path(file: &str, force: bool) -> AppResult<&Path> {
    let path = Path::new(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }

    ensure_writable(path, force)?;

    Ok(path)
}
