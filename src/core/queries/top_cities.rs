use crate::models::{Season, Transaction};
use std::collections::{HashMap, HashSet};

/// Mean items per transaction for one of the leading cities.
#[derive(Debug, Clone, PartialEq)]
pub struct CityItemsMean {
    pub city: String,
    pub mean_items: f64,
}

/// Seasonal sales total for one of the leading cities.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySeasonSales {
    pub city: String,
    pub season: Season,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopCitiesReport {
    pub top: Vec<CityItemsMean>,
    pub seasonal_sales: Vec<CitySeasonSales>,
}

/// The 3 cities with the highest mean `total_items` per transaction, and the
/// seasonal sales breakdown restricted to those cities.
///
/// Means are accumulated in first-seen city order and selected with a stable
/// descending sort, so exact ties keep input row order. Which city wins an
/// exact tie is thus row-order-sensitive, and not meaningful across datasets
/// that shuffle rows.
pub fn top_cities_by_items(rows: &[Transaction]) -> TopCitiesReport {
    let mut city_order: Vec<&str> = Vec::new();
    let mut items: HashMap<&str, (u64, usize)> = HashMap::new();

    for t in rows {
        let entry = items.entry(t.city.as_str()).or_insert_with(|| {
            city_order.push(t.city.as_str());
            (0, 0)
        });
        entry.0 += t.total_items as u64;
        entry.1 += 1;
    }

    let mut means: Vec<CityItemsMean> = city_order
        .iter()
        .map(|city| {
            let (sum, n) = items[city];
            CityItemsMean {
                city: city.to_string(),
                mean_items: sum as f64 / n as f64,
            }
        })
        .collect();

    means.sort_by(|a, b| b.mean_items.total_cmp(&a.mean_items));
    means.truncate(3);

    let selected: HashSet<&str> = means.iter().map(|c| c.city.as_str()).collect();

    let mut sales: HashMap<(&str, Season), f64> = HashMap::new();
    for t in rows {
        if !selected.contains(t.city.as_str()) {
            continue;
        }
        *sales.entry((t.city.as_str(), t.season)).or_insert(0.0) += t.amount;
    }

    let mut seasonal_sales: Vec<CitySeasonSales> = sales
        .into_iter()
        .map(|((city, season), total_amount)| CitySeasonSales {
            city: city.to_string(),
            season,
            total_amount,
        })
        .collect();

    seasonal_sales.sort_by(|a, b| a.city.cmp(&b.city).then(a.season.cmp(&b.season)));

    TopCitiesReport {
        top: means,
        seasonal_sales,
    }
}
