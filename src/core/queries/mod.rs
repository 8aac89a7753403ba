//! The five reporting queries. Each is a pure function over the validated
//! transaction slice: read-only, deterministic, independent of the others.

pub mod discount;
pub mod payment;
pub mod promotions;
pub mod store_season;
pub mod top_cities;

pub use discount::{MonthlyDiscountSplit, monthly_discount_split};
pub use payment::{CityPaymentCount, dominant_payment_by_city};
pub use promotions::{PromotionSeasonMean, promotion_effectiveness};
pub use store_season::{StoreSeasonMean, average_by_store_season};
pub use top_cities::{CityItemsMean, CitySeasonSales, TopCitiesReport, top_cities_by_items};
