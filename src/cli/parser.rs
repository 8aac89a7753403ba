use crate::export::ExportFormat;
use crate::report::ReportView;
use clap::{Parser, Subcommand};

/// Command-line interface definition for storelens
/// CLI application turning a retail transaction file into insight reports
#[derive(Parser)]
#[command(
    name = "storelens",
    version = env!("CARGO_PKG_VERSION"),
    about = "A business-insights CLI: aggregate retail transactions into seasonal, city and promotion reports",
    long_about = None
)]
pub struct Cli {
    /// Override dataset path (useful for tests or ad-hoc files)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show a summary of the loaded dataset
    Info,

    /// Render all five insight reports with tables and charts
    Dashboard {
        #[arg(long = "no-charts", help = "Tables only, skip the bar charts")]
        no_charts: bool,
    },

    /// Render a single report view
    Report {
        /// Which view to render (q1..q5 aliases accepted)
        #[arg(long, value_enum)]
        view: ReportView,

        #[arg(long, help = "Also render the view's chart")]
        chart: bool,
    },

    /// Filter transactions for display (never feeds the reports)
    Filter {
        #[arg(long = "store-type", help = "Keep only these store types")]
        store_type: Vec<String>,

        #[arg(long = "season", help = "Keep only these seasons")]
        season: Vec<String>,

        #[arg(long = "city", help = "Keep only these cities")]
        city: Vec<String>,

        #[arg(long = "min-amount", help = "Lower bound of the amount range (inclusive)")]
        min_amount: Option<f64>,

        #[arg(long = "max-amount", help = "Upper bound of the amount range (inclusive)")]
        max_amount: Option<f64>,

        #[arg(long, help = "Show at most this many rows")]
        limit: Option<usize>,
    },

    /// Export a report view or the (filtered) transactions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "transactions")]
        view: ReportView,

        #[arg(long = "store-type", help = "Transactions view: keep only these store types")]
        store_type: Vec<String>,

        #[arg(long = "season", help = "Transactions view: keep only these seasons")]
        season: Vec<String>,

        #[arg(long = "city", help = "Transactions view: keep only these cities")]
        city: Vec<String>,

        #[arg(long = "min-amount", help = "Transactions view: lower amount bound")]
        min_amount: Option<f64>,

        #[arg(long = "max-amount", help = "Transactions view: upper amount bound")]
        max_amount: Option<f64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
