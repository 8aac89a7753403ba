pub mod render;
pub mod tables;

use clap::ValueEnum;

/// The selectable report views: the five aggregated questions plus the raw
/// transaction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportView {
    #[value(name = "store-season", alias = "q1")]
    StoreSeason,
    #[value(name = "payments", alias = "q2")]
    Payments,
    #[value(name = "discounts", alias = "q3")]
    Discounts,
    #[value(name = "top-cities", alias = "q4")]
    TopCities,
    #[value(name = "promotions", alias = "q5")]
    Promotions,
    #[value(name = "transactions")]
    Transactions,
}

impl ReportView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportView::StoreSeason => "store-season",
            ReportView::Payments => "payments",
            ReportView::Discounts => "discounts",
            ReportView::TopCities => "top-cities",
            ReportView::Promotions => "promotions",
            ReportView::Transactions => "transactions",
        }
    }

    pub const AGGREGATED: [ReportView; 5] = [
        ReportView::StoreSeason,
        ReportView::Payments,
        ReportView::Discounts,
        ReportView::TopCities,
        ReportView::Promotions,
    ];
}
