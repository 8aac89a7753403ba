//! Terminal rendering of report views: tables, charts and the short prose
//! line shown above each dashboard section.

use crate::config::Config;
use crate::core::logic::Insights;
use crate::export::model::ReportTable;
use crate::report::ReportView;
use crate::utils::chart;
use crate::utils::colors::colorize_zero_amount;
use crate::utils::table::Table;

/// Render a report table for the terminal. Zero money cells in the
/// discount pivot are greyed so empty slots recede.
pub fn render_table(table: &ReportTable, cfg: &Config) -> String {
    let mut t = Table::new(table.headers.iter().map(|h| h.to_string()).collect());

    for row in &table.rows {
        t.add_row(row.iter().map(|cell| colorize_zero_amount(cell)).collect());
    }

    t.render(&cfg.separator_char)
}

/// The chart belonging to a view, if it has one.
pub fn chart_for(view: ReportView, insights: &Insights, cfg: &Config) -> Option<String> {
    let width = cfg.chart_width;

    match view {
        ReportView::StoreSeason => {
            let items: Vec<(String, f64)> = insights
                .store_season
                .iter()
                .map(|r| (format!("{} / {}", r.store_type, r.season), r.mean_amount))
                .collect();
            Some(chart::bar_chart(&items, width))
        }
        ReportView::Payments => {
            let items: Vec<(String, f64)> = insights
                .payments
                .iter()
                .map(|r| (format!("{} ({})", r.city, r.payment_method), r.count as f64))
                .collect();
            Some(chart::bar_chart(&items, width))
        }
        ReportView::Discounts => Some(chart::monthly_split_chart(&insights.discount_split, width)),
        ReportView::TopCities => {
            let items: Vec<(String, f64)> = insights
                .top_cities
                .seasonal_sales
                .iter()
                .map(|r| (format!("{} / {}", r.city, r.season), r.total_amount))
                .collect();
            Some(chart::bar_chart(&items, width))
        }
        ReportView::Promotions => {
            let items: Vec<(String, f64)> = insights
                .promotions
                .iter()
                .map(|r| (format!("{} / {}", r.season, r.promotion), r.mean_amount))
                .collect();
            Some(chart::bar_chart(&items, width))
        }
        ReportView::Transactions => None,
    }
}

/// One-line description printed above each dashboard section.
pub fn blurb(view: ReportView) -> &'static str {
    match view {
        ReportView::StoreSeason => {
            "Average transaction amounts across store types and seasons, showing which store types perform best in each season."
        }
        ReportView::Payments => {
            "The payment method customers reach for most in transactions above the average amount, city by city."
        }
        ReportView::Discounts => {
            "Total monthly sales for discounted and non-discounted transactions, exposing the impact of discounts over the year."
        }
        ReportView::TopCities => {
            "The three cities with the most items per transaction, and how their sales spread across the seasons."
        }
        ReportView::Promotions => {
            "Which promotion drives the highest average transaction amount within each season."
        }
        ReportView::Transactions => "Raw transaction rows.",
    }
}
