use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::data::load_dataset;
use crate::errors::AppResult;
use crate::report::tables::top_cities_means_table;
use crate::report::{ReportView, render, tables};
use crate::ui::messages::{question, title};
use crate::utils::format_money;

/// Handle the `dashboard` command: all five reports in sequence, each with
/// its table and (unless suppressed) its chart.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { no_charts } = cmd {
        let dataset = load_dataset(&cfg.dataset)?;
        let insights = Core::build_insights(&dataset);

        title("Business Insights Dashboard");
        println!(
            "{} transactions between {} and {}.\n",
            dataset.len(),
            dataset.date_range().0,
            dataset.date_range().1
        );

        for (number, view) in ReportView::AGGREGATED.iter().enumerate() {
            question(number + 1, view_heading(*view));
            println!("{}\n", render::blurb(*view));

            // The payments view cuts on the global mean; say so.
            if *view == ReportView::Payments {
                println!(
                    "High-value threshold: {} (dataset mean)\n",
                    format_money(insights.high_value_threshold, &cfg.currency_symbol)
                );
            }

            // The top-cities view leads with the means list.
            if *view == ReportView::TopCities {
                let means = top_cities_means_table(&insights.top_cities);
                println!("{}", render::render_table(&means, cfg));
            }

            if let Some(table) = tables::table_for(*view, &insights) {
                println!("{}", render::render_table(&table, cfg));
            }

            if !*no_charts
                && let Some(chart) = render::chart_for(*view, &insights, cfg)
            {
                println!("{}", chart);
            }
        }
    }
    Ok(())
}

fn view_heading(view: ReportView) -> &'static str {
    match view {
        ReportView::StoreSeason => {
            "What is the average transaction amount across store types, and how does it vary by season?"
        }
        ReportView::Payments => {
            "Which payment method dominates high-value transactions in each city?"
        }
        ReportView::Discounts => "How do sales with and without discounts move over the months?",
        ReportView::TopCities => {
            "Which cities buy the most items per transaction, and how do their sales vary by season?"
        }
        ReportView::Promotions => "Which promotion performs best in each season?",
        ReportView::Transactions => "Transactions",
    }
}
