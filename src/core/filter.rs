//! Display-only filter stage. The filtered subset feeds the `filter`
//! command and transaction exports, never the five reporting queries.

use crate::data::Dataset;
use crate::errors::{AppError, AppResult};
use crate::models::{Season, Transaction};

#[derive(Debug, Clone)]
pub struct FilterParams {
    pub store_types: Vec<String>,
    pub seasons: Vec<Season>,
    pub cities: Vec<String>,
    /// Inclusive on both ends.
    pub amount_range: (f64, f64),
}

impl FilterParams {
    /// The default selection: every category selected, full amount range.
    /// Applying it returns the table unchanged.
    pub fn all_of(dataset: &Dataset) -> Self {
        let (min, max) = dataset.amount_bounds();
        FilterParams {
            store_types: dataset.store_types(),
            seasons: dataset.seasons(),
            cities: dataset.cities(),
            amount_range: (min as f64, max as f64),
        }
    }

    /// Narrow the default selection with CLI arguments. Absent arguments
    /// leave the corresponding predicate at "everything".
    pub fn from_args(
        dataset: &Dataset,
        store_types: &[String],
        seasons: &[String],
        cities: &[String],
        min_amount: Option<f64>,
        max_amount: Option<f64>,
    ) -> AppResult<Self> {
        let mut params = Self::all_of(dataset);

        if !store_types.is_empty() {
            params.store_types = store_types.to_vec();
        }

        if !seasons.is_empty() {
            params.seasons = seasons
                .iter()
                .map(|s| {
                    Season::from_label(s).ok_or_else(|| AppError::InvalidSeason(s.clone()))
                })
                .collect::<AppResult<Vec<_>>>()?;
        }

        if !cities.is_empty() {
            params.cities = cities.to_vec();
        }

        if let Some(min) = min_amount {
            params.amount_range.0 = min;
        }
        if let Some(max) = max_amount {
            params.amount_range.1 = max;
        }

        if params.amount_range.0 > params.amount_range.1 {
            return Err(AppError::InvalidRange(format!(
                "min {} exceeds max {}",
                params.amount_range.0, params.amount_range.1
            )));
        }

        Ok(params)
    }

    /// All four predicates, conjunctively.
    pub fn matches(&self, t: &Transaction) -> bool {
        self.store_types.iter().any(|s| *s == t.store_type)
            && self.seasons.contains(&t.season)
            && self.cities.iter().any(|c| *c == t.city)
            && t.amount >= self.amount_range.0
            && t.amount <= self.amount_range.1
    }

    pub fn apply(&self, rows: &[Transaction]) -> Vec<Transaction> {
        rows.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
