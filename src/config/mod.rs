use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the transaction dataset (.csv or .xlsx).
    pub dataset: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_chart_width() -> usize {
    40
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: "./Transactions.xlsx".to_string(),
            chart_width: default_chart_width(),
            currency_symbol: default_currency_symbol(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("storelens")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".storelens")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("storelens.conf")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable. A broken config is reported but never fatal: every value
    /// has a workable default and `--data` can override the dataset path.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Ignoring unparseable config {}: {}",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!("Cannot read config {}: {}", path.display(), e));
                Config::default()
            }
        }
    }

    /// Initialize the configuration directory and file.
    pub fn init_all(custom_dataset: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            dataset: custom_dataset.unwrap_or_else(|| Config::default().dataset),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Dataset:     {}", config.dataset);

        Ok(())
    }

    /// Report config fields that fall back to defaults in the file on disk.
    pub fn missing_fields() -> Vec<&'static str> {
        let path = Self::config_file();

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return vec!["dataset", "chart_width", "currency_symbol", "separator_char"],
        };

        let doc: serde_yaml::Value = match serde_yaml::from_str(&content) {
            Ok(v) => v,
            Err(_) => return vec!["dataset", "chart_width", "currency_symbol", "separator_char"],
        };

        let mut missing = Vec::new();
        for field in ["dataset", "chart_width", "currency_symbol", "separator_char"] {
            if doc.get(field).is_none() {
                missing.push(field);
            }
        }
        missing
    }
}
