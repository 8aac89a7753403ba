use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::FilterParams;
use crate::data::load_dataset;
use crate::errors::AppResult;
use crate::export::model::transactions_to_table;
use crate::report::render;
use crate::ui::messages::warning;

/// Handle the `filter` command: display-only row selection. The result is
/// never fed back into the report queries.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Filter {
        store_type,
        season,
        city,
        min_amount,
        max_amount,
        limit,
    } = cmd
    {
        let dataset = load_dataset(&cfg.dataset)?;

        let params = FilterParams::from_args(
            &dataset,
            store_type,
            season,
            city,
            *min_amount,
            *max_amount,
        )?;

        let matched = params.apply(dataset.rows());

        println!(
            "\n{} of {} transactions match the current selection.\n",
            matched.len(),
            dataset.len()
        );

        if matched.is_empty() {
            warning("No transactions match the selected filters.");
            return Ok(());
        }

        let shown = match limit {
            Some(n) => &matched[..(*n).min(matched.len())],
            None => &matched[..],
        };

        let table = transactions_to_table("Filtered transactions", shown);
        println!("{}", render::render_table(&table, cfg));

        if shown.len() < matched.len() {
            println!("… {} more rows not shown.", matched.len() - shown.len());
        }
    }
    Ok(())
}
