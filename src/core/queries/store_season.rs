use crate::models::{Season, Transaction};
use std::collections::HashMap;

/// One row of the store-type × season report.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSeasonMean {
    pub store_type: String,
    pub season: Season,
    pub mean_amount: f64,
}

/// Mean transaction amount per (store type, season) pair.
///
/// Pairs absent from the data simply do not appear. Rows are sorted
/// ascending by store type, then season.
pub fn average_by_store_season(rows: &[Transaction]) -> Vec<StoreSeasonMean> {
    let mut groups: HashMap<(&str, Season), (f64, usize)> = HashMap::new();

    for t in rows {
        let entry = groups.entry((t.store_type.as_str(), t.season)).or_insert((0.0, 0));
        entry.0 += t.amount;
        entry.1 += 1;
    }

    let mut out: Vec<StoreSeasonMean> = groups
        .into_iter()
        .map(|((store_type, season), (sum, n))| StoreSeasonMean {
            store_type: store_type.to_string(),
            season,
            mean_amount: sum / n as f64,
        })
        .collect();

    out.sort_by(|a, b| {
        a.store_type
            .cmp(&b.store_type)
            .then(a.season.cmp(&b.season))
    });

    out
}
