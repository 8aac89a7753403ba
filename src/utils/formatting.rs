//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Two-decimal money value without symbol, e.g. `52.05`.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Money value with currency symbol, e.g. `$52.05`.
pub fn format_money(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}

/// Human title and accent color for a report view code.
/// Used by `report` headers and in tests.
pub fn describe_view(code: &str) -> (String, &'static str) {
    match code {
        "store-season" => (
            "Average Transaction Amount by Store Type and Season".into(),
            "\x1b[34m",
        ),
        "payments" => (
            "Dominant Payment Method for High-Value Transactions by City".into(),
            "\x1b[36m",
        ),
        "discounts" => (
            "Monthly Sales With and Without Discounts".into(),
            "\x1b[33m",
        ),
        "top-cities" => (
            "Top Cities by Average Items per Transaction".into(),
            "\x1b[35m",
        ),
        "promotions" => (
            "Promotion Effectiveness by Season".into(),
            "\x1b[32m",
        ),
        "transactions" => ("Transactions".into(), "\x1b[0m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
