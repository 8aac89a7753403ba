use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::data::load_dataset;
use crate::errors::AppResult;
use crate::export::model::transactions_to_table;
use crate::report::tables::top_cities_means_table;
use crate::report::{ReportView, render, tables};
use crate::utils::format_money;
use crate::utils::formatting::{bold, describe_view};

/// Handle the `report` command: one view, table plus optional chart.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { view, chart } = cmd {
        let dataset = load_dataset(&cfg.dataset)?;
        let insights = Core::build_insights(&dataset);

        let (view_title, accent) = describe_view(view.as_str());
        println!("\n{}{}\x1b[0m\n", accent, bold(&view_title));

        match view {
            ReportView::Transactions => {
                let table = transactions_to_table("Transactions", dataset.rows());
                println!("{}", render::render_table(&table, cfg));
            }
            ReportView::Payments => {
                println!(
                    "High-value threshold: {} (dataset mean)\n",
                    format_money(insights.high_value_threshold, &cfg.currency_symbol)
                );
                if let Some(table) = tables::table_for(*view, &insights) {
                    println!("{}", render::render_table(&table, cfg));
                }
            }
            ReportView::TopCities => {
                let means = top_cities_means_table(&insights.top_cities);
                println!("{}", render::render_table(&means, cfg));
                if let Some(table) = tables::table_for(*view, &insights) {
                    println!("{}", render::render_table(&table, cfg));
                }
            }
            _ => {
                if let Some(table) = tables::table_for(*view, &insights) {
                    println!("{}", render::render_table(&table, cfg));
                }
            }
        }

        if *chart && let Some(c) = render::chart_for(*view, &insights, cfg) {
            println!("{}", c);
        }
    }
    Ok(())
}
