use crate::models::Transaction;
use std::collections::HashMap;

/// Dominant payment method of one city among high-value transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct CityPaymentCount {
    pub city: String,
    pub payment_method: String,
    pub count: usize,
}

/// Most common payment method per city among transactions whose amount
/// strictly exceeds `threshold` (the mean amount of the whole table).
///
/// Counts accumulate in per-city vectors ordered by first appearance, and
/// the max scan below only replaces the current best on a strictly larger
/// count. Ties therefore go to the method seen first in row order, not to
/// whatever order a hash map happens to iterate in.
pub fn dominant_payment_by_city(rows: &[Transaction], threshold: f64) -> Vec<CityPaymentCount> {
    let mut city_order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, Vec<(&str, usize)>> = HashMap::new();

    for t in rows {
        if t.amount <= threshold {
            continue;
        }

        let methods = counts.entry(t.city.as_str()).or_insert_with(|| {
            city_order.push(t.city.as_str());
            Vec::new()
        });

        match methods.iter_mut().find(|(m, _)| *m == t.payment_method) {
            Some(slot) => slot.1 += 1,
            None => methods.push((t.payment_method.as_str(), 1)),
        }
    }

    let mut out: Vec<CityPaymentCount> = city_order
        .iter()
        .map(|city| {
            let methods = &counts[city];
            let mut best = &methods[0];
            for m in &methods[1..] {
                if m.1 > best.1 {
                    best = m;
                }
            }
            CityPaymentCount {
                city: city.to_string(),
                payment_method: best.0.to_string(),
                count: best.1,
            }
        })
        .collect();

    out.sort_by(|a, b| a.city.cmp(&b.city));

    out
}
