//! Text bar charts for the report views.

use crate::core::queries::MonthlyDiscountSplit;
use crate::utils::date::month_abbrev;
use crate::utils::table::display_width;
use ansi_term::Colour;

const PALETTE: [Colour; 6] = [
    Colour::Blue,
    Colour::Green,
    Colour::Purple,
    Colour::Yellow,
    Colour::Cyan,
    Colour::Red,
];

/// Horizontal bar chart: one labelled bar per item, scaled so the largest
/// value fills `width` cells.
pub fn bar_chart(items: &[(String, f64)], width: usize) -> String {
    if items.is_empty() {
        return String::new();
    }

    let max = items.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let label_w = items.iter().map(|(l, _)| display_width(l)).max().unwrap_or(0);

    let mut out = String::new();
    for (i, (label, value)) in items.iter().enumerate() {
        let bar = "█".repeat(scaled(*value, max, width));
        let colour = PALETTE[i % PALETTE.len()];
        out.push_str(&format!(
            "{:<label_w$}  {} {:.2}\n",
            label,
            colour.paint(bar),
            value,
            label_w = label_w
        ));
    }

    out
}

/// Twelve-month two-series chart for the discount split: one bar pair per
/// month, "No Discount" before "With Discount".
pub fn monthly_split_chart(rows: &[MonthlyDiscountSplit], width: usize) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let no = Colour::Blue;
    let with = Colour::Green;

    let max = rows
        .iter()
        .flat_map(|r| [r.without_discount, r.with_discount])
        .fold(f64::NEG_INFINITY, f64::max);

    let mut out = String::new();
    out.push_str(&format!(
        "{} No Discount   {} With Discount\n",
        no.paint("█"),
        with.paint("█")
    ));

    for row in rows {
        let bar_no = "█".repeat(scaled(row.without_discount, max, width));
        let bar_with = "█".repeat(scaled(row.with_discount, max, width));

        out.push_str(&format!(
            "{:<4} {} {:.2}\n",
            month_abbrev(row.month),
            no.paint(bar_no),
            row.without_discount
        ));
        out.push_str(&format!(
            "     {} {:.2}\n",
            with.paint(bar_with),
            row.with_discount
        ));
    }

    out
}

/// Bar length in cells. Non-zero values always draw at least one cell so
/// small groups stay visible next to large ones.
fn scaled(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    (((value / max) * width as f64).round() as usize).max(1)
}
