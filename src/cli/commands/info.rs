use crate::config::Config;
use crate::data::load_dataset;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::format_money;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `info` command: a one-screen summary of the loaded dataset.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let dataset = load_dataset(&cfg.dataset)?;

    println!();

    //
    // 1) FILE
    //
    let path = expand_tilde(&cfg.dataset);
    let file_size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, path.display(), RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROWS
    //
    println!(
        "{}• Transactions:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        dataset.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let (first, last) = dataset.date_range();
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first);
    println!("    to:   {}", last);

    //
    // 4) AMOUNTS
    //
    let (min, max) = dataset.amount_bounds();
    println!(
        "{}• Mean amount:{} {}",
        CYAN,
        RESET,
        format_money(dataset.mean_amount(), &cfg.currency_symbol)
    );
    println!(
        "{}• Amount range:{} {}{} – {}{}",
        CYAN, RESET, cfg.currency_symbol, min, cfg.currency_symbol, max
    );

    //
    // 5) CATEGORIES
    //
    println!(
        "{}• Store types:{} {}",
        CYAN,
        RESET,
        dataset.store_types().join(", ")
    );
    println!(
        "{}• Seasons:{} {}",
        CYAN,
        RESET,
        dataset
            .seasons()
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("{}• Cities:{} {}", CYAN, RESET, dataset.cities().join(", "));
    println!(
        "{}• Payment methods:{} {}",
        CYAN,
        RESET,
        dataset.payment_methods().join(", ")
    );
    println!(
        "{}• Promotions:{} {}",
        CYAN,
        RESET,
        dataset.promotions().join(", ")
    );

    Ok(())
}
