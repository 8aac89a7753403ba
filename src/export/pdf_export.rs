// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::ReportTable;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// PDF export of one report table via PdfManager.
pub(crate) fn export_pdf(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(&table.title, &table.headers, &table.rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF write failed: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
