use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file, pointing at the default or given dataset
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing storelens…");
    println!("📄 Config file : {}", path.display());
    println!("📊 Dataset     : {}", &cfg.dataset);

    if !std::path::Path::new(&cfg.dataset).exists() {
        println!(
            "⚠️  The dataset file does not exist yet; point `dataset` in the config (or --data) at your transaction file."
        );
    }

    println!("🎉 storelens initialization completed!");
    Ok(())
}
