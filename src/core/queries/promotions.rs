use crate::models::{Season, Transaction};
use std::collections::HashMap;

/// Mean transaction amount of one (promotion, season) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionSeasonMean {
    pub promotion: String,
    pub season: Season,
    pub mean_amount: f64,
}

/// Mean amount per (promotion, season), ranked within each season.
///
/// The composite sort key is load-bearing: season ascending, then mean
/// amount descending, then promotion label ascending. It is what ranks the
/// promotions inside a season and breaks exact-mean ties.
pub fn promotion_effectiveness(rows: &[Transaction]) -> Vec<PromotionSeasonMean> {
    let mut groups: HashMap<(&str, Season), (f64, usize)> = HashMap::new();

    for t in rows {
        let entry = groups.entry((t.promotion.as_str(), t.season)).or_insert((0.0, 0));
        entry.0 += t.amount;
        entry.1 += 1;
    }

    let mut out: Vec<PromotionSeasonMean> = groups
        .into_iter()
        .map(|((promotion, season), (sum, n))| PromotionSeasonMean {
            promotion: promotion.to_string(),
            season,
            mean_amount: sum / n as f64,
        })
        .collect();

    out.sort_by(|a, b| {
        a.season
            .cmp(&b.season)
            .then(b.mean_amount.total_cmp(&a.mean_amount))
            .then(a.promotion.cmp(&b.promotion))
    });

    out
}
