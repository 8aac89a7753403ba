/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey out zero money cells ("0", "0.0", "0.00") so empty pivot slots
/// recede visually.
pub fn colorize_zero_amount(value: &str) -> String {
    if matches!(value.trim().parse::<f64>(), Ok(v) if v == 0.0) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Color for a value compared against a reference mean:
/// above → green, below → red, equal → reset.
pub fn color_vs_mean(value: f64, mean: f64) -> &'static str {
    if value > mean {
        GREEN
    } else if value < mean {
        RED
    } else {
        RESET
    }
}
