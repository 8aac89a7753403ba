use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterParams;
use crate::core::logic::Core;
use crate::data::load_dataset;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::report::{ReportView, tables};

/// Handle the `export` command. Filter flags only apply to the raw
/// transactions view; the aggregated views always run over the full table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        view,
        store_type,
        season,
        city,
        min_amount,
        max_amount,
        force,
    } = cmd
    {
        let dataset = load_dataset(&cfg.dataset)?;

        match view {
            ReportView::Transactions => {
                let params = FilterParams::from_args(
                    &dataset,
                    store_type,
                    season,
                    city,
                    *min_amount,
                    *max_amount,
                )?;
                let matched = params.apply(dataset.rows());

                ExportLogic::export_transactions("Transactions", &matched, format, file, *force)?;
            }
            _ => {
                let insights = Core::build_insights(&dataset);
                // table_for covers every aggregated view.
                if let Some(table) = tables::table_for(*view, &insights) {
                    ExportLogic::export_table(&table, format, file, *force)?;
                }
            }
        }
    }
    Ok(())
}
