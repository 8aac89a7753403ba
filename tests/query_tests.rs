//! Library-level tests of the five report queries.

use chrono::NaiveDate;
use storelens::core::queries::{
    average_by_store_season, dominant_payment_by_city, monthly_discount_split,
    promotion_effectiveness, top_cities_by_items,
};
use storelens::models::{Season, Transaction};

#[allow(clippy::too_many_arguments)]
fn tx(
    date: &str,
    store: &str,
    season: Season,
    city: &str,
    amount: f64,
    method: &str,
    discount: bool,
    items: u32,
    promo: &str,
) -> Transaction {
    Transaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date"),
        store_type: store.to_string(),
        season,
        city: city.to_string(),
        amount,
        payment_method: method.to_string(),
        discount_applied: discount,
        total_items: items,
        promotion: promo.to_string(),
    }
}

fn sample_rows() -> Vec<Transaction> {
    vec![
        tx("2024-01-10", "Grocery", Season::Winter, "Chicago", 100.0, "Cash", false, 5, "None"),
        tx("2024-01-20", "Grocery", Season::Winter, "Chicago", 200.0, "Card", true, 3, "BOGO"),
        tx("2024-02-05", "Electronics", Season::Winter, "Houston", 300.0, "Mobile", false, 2, "None"),
        tx("2024-03-03", "Grocery", Season::Spring, "Dallas", 30.0, "Cash", false, 1, "None"),
        tx("2024-03-04", "Grocery", Season::Spring, "Dallas", 40.0, "Card", true, 1, "Discount"),
        tx("2024-04-12", "Grocery", Season::Spring, "Miami", 10.0, "Cash", false, 1, "Discount"),
        tx("2024-04-15", "Grocery", Season::Spring, "Miami", 20.0, "Cash", true, 2, "Discount"),
        tx("2024-06-01", "Electronics", Season::Summer, "Houston", 400.0, "Mobile", true, 8, "BOGO"),
        tx("2024-06-20", "Clothing", Season::Summer, "Chicago", 50.0, "Card", false, 4, "None"),
        tx("2024-09-10", "Clothing", Season::Fall, "Miami", 60.0, "Card", false, 6, "BOGO"),
        tx("2024-09-15", "Clothing", Season::Fall, "Houston", 150.0, "Mobile", true, 7, "Discount"),
        tx("2024-11-02", "Grocery", Season::Fall, "Chicago", 250.0, "Cash", false, 9, "None"),
    ]
}

fn mean_amount(rows: &[Transaction]) -> f64 {
    rows.iter().map(|t| t.amount).sum::<f64>() / rows.len() as f64
}

// ---------------------------------------------------------------------------
// Q1 — mean amount by (store type, season)
// ---------------------------------------------------------------------------

#[test]
fn store_season_two_rows_collapse_to_one_mean() {
    let rows = vec![
        tx("2024-04-01", "A", Season::Spring, "X", 10.0, "Cash", false, 1, "None"),
        tx("2024-04-02", "A", Season::Spring, "X", 20.0, "Cash", false, 1, "None"),
    ];

    let out = average_by_store_season(&rows);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].store_type, "A");
    assert_eq!(out[0].season, Season::Spring);
    assert_eq!(out[0].mean_amount, 15.0);
}

#[test]
fn store_season_one_row_per_present_pair_sorted() {
    let rows = sample_rows();
    let out = average_by_store_season(&rows);

    // 7 (store type, season) pairs occur in the sample.
    assert_eq!(out.len(), 7);

    // Sorted ascending by store type, then season label.
    let keys: Vec<(String, Season)> = out
        .iter()
        .map(|r| (r.store_type.clone(), r.season))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    // Spot-check two means.
    let grocery_spring = out
        .iter()
        .find(|r| r.store_type == "Grocery" && r.season == Season::Spring)
        .expect("Grocery/Spring present");
    assert!((grocery_spring.mean_amount - 25.0).abs() < 1e-9);

    let clothing_fall = out
        .iter()
        .find(|r| r.store_type == "Clothing" && r.season == Season::Fall)
        .expect("Clothing/Fall present");
    assert!((clothing_fall.mean_amount - 105.0).abs() < 1e-9);
}

#[test]
fn store_season_means_stay_within_group_bounds() {
    let rows = sample_rows();

    for group in average_by_store_season(&rows) {
        let amounts: Vec<f64> = rows
            .iter()
            .filter(|t| t.store_type == group.store_type && t.season == group.season)
            .map(|t| t.amount)
            .collect();

        let min = amounts.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = amounts.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        assert!(group.mean_amount >= min && group.mean_amount <= max);
    }
}

// ---------------------------------------------------------------------------
// Q2 — dominant payment method per city among high-value rows
// ---------------------------------------------------------------------------

#[test]
fn payments_threshold_is_global_mean_and_counts_dominate() {
    let rows = sample_rows();
    let threshold = mean_amount(&rows);

    assert!((threshold - 1610.0 / 12.0).abs() < 1e-9);

    let out = dominant_payment_by_city(&rows, threshold);

    // Only Chicago and Houston have rows above the mean.
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].city, "Chicago");
    assert_eq!(out[1].city, "Houston");
    assert_eq!(out[1].payment_method, "Mobile");
    assert_eq!(out[1].count, 3);

    // The winner's count is >= every competitor's count in the subset.
    for winner in &out {
        let mut competitor_counts: std::collections::HashMap<&str, usize> =
            std::collections::HashMap::new();
        for t in rows.iter().filter(|t| t.amount > threshold && t.city == winner.city) {
            *competitor_counts.entry(t.payment_method.as_str()).or_insert(0) += 1;
        }
        for (_, count) in competitor_counts {
            assert!(winner.count >= count);
        }
    }
}

#[test]
fn payments_tie_goes_to_first_seen_method() {
    let rows = sample_rows();
    let out = dominant_payment_by_city(&rows, mean_amount(&rows));

    // Chicago's high-value rows: Card (200 on Jan 20) before Cash (250 on
    // Nov 2), one each. The earlier method wins the tie.
    let chicago = out.iter().find(|r| r.city == "Chicago").expect("Chicago present");
    assert_eq!(chicago.payment_method, "Card");
    assert_eq!(chicago.count, 1);
}

#[test]
fn payments_empty_subset_is_valid_empty_output() {
    let rows = sample_rows();
    // A threshold above every amount leaves no high-value rows.
    let out = dominant_payment_by_city(&rows, 1e9);
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// Q3 — monthly sales split by discount flag
// ---------------------------------------------------------------------------

#[test]
fn discount_split_emits_all_twelve_months_zero_filled() {
    let rows = sample_rows();
    let out = monthly_discount_split(&rows);

    assert_eq!(out.len(), 12);
    for (i, row) in out.iter().enumerate() {
        assert_eq!(row.month, i as u32 + 1);
    }

    // Months with no transactions at all are fully zero.
    let july = &out[6];
    assert_eq!(july.without_discount, 0.0);
    assert_eq!(july.with_discount, 0.0);

    // A month with rows on only one side of the flag still appears, with the
    // other side zero-filled.
    let february = &out[1];
    assert_eq!(february.without_discount, 300.0);
    assert_eq!(february.with_discount, 0.0);
}

#[test]
fn discount_split_columns_sum_to_flag_totals() {
    let rows = sample_rows();
    let out = monthly_discount_split(&rows);

    let without: f64 = out.iter().map(|r| r.without_discount).sum();
    let with: f64 = out.iter().map(|r| r.with_discount).sum();

    assert!((without - 800.0).abs() < 1e-9);
    assert!((with - 810.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Q4 — top cities by mean items, then seasonal sales
// ---------------------------------------------------------------------------

#[test]
fn top_cities_selects_three_largest_means() {
    let rows = sample_rows();
    let report = top_cities_by_items(&rows);

    assert_eq!(report.top.len(), 3);
    assert_eq!(report.top[0].city, "Houston");
    assert_eq!(report.top[1].city, "Chicago");
    assert_eq!(report.top[2].city, "Miami");

    assert!((report.top[0].mean_items - 17.0 / 3.0).abs() < 1e-9);
    assert!((report.top[1].mean_items - 21.0 / 4.0).abs() < 1e-9);

    // Every selected mean >= every unselected mean (Dallas, 1.0).
    for selected in &report.top {
        assert!(selected.mean_items >= 1.0);
    }
}

#[test]
fn top_cities_sales_restricted_to_selected_cities() {
    let rows = sample_rows();
    let report = top_cities_by_items(&rows);

    assert!(!report.seasonal_sales.is_empty());
    for row in &report.seasonal_sales {
        assert!(report.top.iter().any(|c| c.city == row.city));
        assert_ne!(row.city, "Dallas");
    }

    // Sorted by city then season; spot-check a total.
    let keys: Vec<(String, Season)> = report
        .seasonal_sales
        .iter()
        .map(|r| (r.city.clone(), r.season))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let chicago_winter = report
        .seasonal_sales
        .iter()
        .find(|r| r.city == "Chicago" && r.season == Season::Winter)
        .expect("Chicago/Winter present");
    assert!((chicago_winter.total_amount - 300.0).abs() < 1e-9);
}

#[test]
fn top_cities_exact_tie_keeps_first_seen_order() {
    // Two cities with identical means; the one appearing first in row order
    // ranks first.
    let rows = vec![
        tx("2024-01-01", "A", Season::Winter, "Beta", 10.0, "Cash", false, 4, "None"),
        tx("2024-01-02", "A", Season::Winter, "Alpha", 10.0, "Cash", false, 4, "None"),
        tx("2024-01-03", "A", Season::Winter, "Gamma", 10.0, "Cash", false, 2, "None"),
        tx("2024-01-04", "A", Season::Winter, "Delta", 10.0, "Cash", false, 1, "None"),
    ];

    let report = top_cities_by_items(&rows);
    let cities: Vec<&str> = report.top.iter().map(|c| c.city.as_str()).collect();
    assert_eq!(cities, vec!["Beta", "Alpha", "Gamma"]);
}

// ---------------------------------------------------------------------------
// Q5 — promotion effectiveness by season
// ---------------------------------------------------------------------------

#[test]
fn promotions_ranked_within_each_season() {
    let rows = sample_rows();
    let out = promotion_effectiveness(&rows);

    // Seasons ascend; within a season means never increase.
    for pair in out.windows(2) {
        assert!(pair[0].season <= pair[1].season);
        if pair[0].season == pair[1].season {
            assert!(pair[0].mean_amount >= pair[1].mean_amount);
        }
    }

    // Fall ranking: None 250 > Discount 150 > BOGO 60.
    let fall: Vec<&str> = out
        .iter()
        .filter(|r| r.season == Season::Fall)
        .map(|r| r.promotion.as_str())
        .collect();
    assert_eq!(fall, vec!["None", "Discount", "BOGO"]);
}

#[test]
fn promotions_equal_means_ordered_by_label() {
    let rows = sample_rows();
    let out = promotion_effectiveness(&rows);

    // Winter: BOGO and None both average 200; ascending label breaks the tie.
    let winter: Vec<(&str, f64)> = out
        .iter()
        .filter(|r| r.season == Season::Winter)
        .map(|r| (r.promotion.as_str(), r.mean_amount))
        .collect();

    assert_eq!(winter, vec![("BOGO", 200.0), ("None", 200.0)]);
}
