//! View results reshaped into ordered, named-column report tables.

use crate::core::logic::Insights;
use crate::core::queries::TopCitiesReport;
use crate::export::model::ReportTable;
use crate::report::ReportView;
use crate::utils::formatting::format_amount;

pub fn store_season_table(insights: &Insights) -> ReportTable {
    let mut table = ReportTable::new(
        "Average Transaction Amount by Store Type and Season",
        vec!["Store Type", "Season", "Average Transaction Amount ($)"],
    );

    for row in &insights.store_season {
        table.push_row(vec![
            row.store_type.clone(),
            row.season.label().to_string(),
            format_amount(row.mean_amount),
        ]);
    }

    table
}

pub fn payments_table(insights: &Insights) -> ReportTable {
    let mut table = ReportTable::new(
        "Dominant Payment Method for High-Value Transactions by City",
        vec!["City", "Payment Method", "Count"],
    );

    for row in &insights.payments {
        table.push_row(vec![
            row.city.clone(),
            row.payment_method.clone(),
            row.count.to_string(),
        ]);
    }

    table
}

pub fn discounts_table(insights: &Insights) -> ReportTable {
    let mut table = ReportTable::new(
        "Monthly Sales With and Without Discounts",
        vec!["Month", "No Discount", "With Discount"],
    );

    for row in &insights.discount_split {
        table.push_row(vec![
            row.month.to_string(),
            format_amount(row.without_discount),
            format_amount(row.with_discount),
        ]);
    }

    table
}

/// The leading-cities list (means of items per transaction).
pub fn top_cities_means_table(report: &TopCitiesReport) -> ReportTable {
    let mut table = ReportTable::new(
        "Top Cities by Average Items per Transaction",
        vec!["City", "Average Items"],
    );

    for row in &report.top {
        table.push_row(vec![row.city.clone(), format_amount(row.mean_items)]);
    }

    table
}

/// The seasonal sales breakdown restricted to the leading cities.
pub fn top_cities_sales_table(report: &TopCitiesReport) -> ReportTable {
    let mut table = ReportTable::new(
        "Seasonal Sales for Top Cities",
        vec!["City", "Season", "Total Amount ($)"],
    );

    for row in &report.seasonal_sales {
        table.push_row(vec![
            row.city.clone(),
            row.season.label().to_string(),
            format_amount(row.total_amount),
        ]);
    }

    table
}

pub fn promotions_table(insights: &Insights) -> ReportTable {
    let mut table = ReportTable::new(
        "Promotion Effectiveness by Season",
        vec!["Promotion", "Season", "Average Transaction Amount ($)"],
    );

    for row in &insights.promotions {
        table.push_row(vec![
            row.promotion.clone(),
            row.season.label().to_string(),
            format_amount(row.mean_amount),
        ]);
    }

    table
}

/// The exportable table of an aggregated view. For the top-cities view that
/// is the seasonal sales breakdown, the final result of the question; the
/// means list is displayed alongside it by `report` and `dashboard`.
pub fn table_for(view: ReportView, insights: &Insights) -> Option<ReportTable> {
    match view {
        ReportView::StoreSeason => Some(store_season_table(insights)),
        ReportView::Payments => Some(payments_table(insights)),
        ReportView::Discounts => Some(discounts_table(insights)),
        ReportView::TopCities => Some(top_cities_sales_table(&insights.top_cities)),
        ReportView::Promotions => Some(promotions_table(insights)),
        ReportView::Transactions => None,
    }
}
