use crate::models::Transaction;

/// Sales totals of one calendar month, split by discount flag.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDiscountSplit {
    pub month: u32,
    pub without_discount: f64,
    pub with_discount: f64,
}

/// Total amount per (month, discount flag), pivoted to one row per month.
///
/// All twelve months are always emitted; (month, flag) combinations with no
/// transactions contribute 0. Column order follows flag ordering: false
/// ("No Discount") before true ("With Discount").
pub fn monthly_discount_split(rows: &[Transaction]) -> Vec<MonthlyDiscountSplit> {
    let mut totals = [(0.0_f64, 0.0_f64); 12];

    for t in rows {
        let slot = &mut totals[(t.month() - 1) as usize];
        if t.discount_applied {
            slot.1 += t.amount;
        } else {
            slot.0 += t.amount;
        }
    }

    totals
        .iter()
        .enumerate()
        .map(|(i, (without, with))| MonthlyDiscountSplit {
            month: i as u32 + 1,
            without_discount: *without,
            with_discount: *with,
        })
        .collect()
}
