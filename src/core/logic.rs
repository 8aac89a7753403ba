use crate::core::queries::{
    MonthlyDiscountSplit, PromotionSeasonMean, StoreSeasonMean, TopCitiesReport,
    CityPaymentCount, discount, payment, promotions, store_season, top_cities,
};
use crate::data::Dataset;

/// All five reporting views, computed eagerly from one dataset.
#[derive(Debug)]
pub struct Insights {
    pub store_season: Vec<StoreSeasonMean>,
    pub payments: Vec<CityPaymentCount>,
    pub discount_split: Vec<MonthlyDiscountSplit>,
    pub top_cities: TopCitiesReport,
    pub promotions: Vec<PromotionSeasonMean>,
    /// The global mean amount the payment view cut on.
    pub high_value_threshold: f64,
}

pub struct Core;

impl Core {
    pub fn build_insights(dataset: &Dataset) -> Insights {
        let rows = dataset.rows();
        let threshold = dataset.mean_amount();

        Insights {
            store_season: store_season::average_by_store_season(rows),
            payments: payment::dominant_payment_by_city(rows, threshold),
            discount_split: discount::monthly_discount_split(rows),
            top_cities: top_cities::top_cities_by_items(rows),
            promotions: promotions::promotion_effectiveness(rows),
            high_value_threshold: threshold,
        }
    }
}
