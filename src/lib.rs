#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
mod ui;
pub mod utils;

use std::{path::PathBuf, sync::Arc};

// Re-export commonly used types outside of crate (for the simulate binary and tests)
pub use analysis::ScenarioEngine;
pub use app::App;
pub use config::{NegativeForecastPolicy, PERSISTENCE};
pub use data::{CsvTableProvider, DemoTableProvider, ScenarioTables, TableCache, TableProvider};
pub use error::{LoadError, ScenarioError};
pub use models::{ScenarioInput, ScenarioReport};

// CLI argument parsing
use clap::{Args, Parser};

/// Where the two input tables come from. Shared by the dashboard and the `simulate` binary.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Monthly base forecast CSV. Not shipped with the repo: supply the export or pass --demo
    #[arg(long, default_value = config::DEFAULT_FORECAST_PATH)]
    pub forecast: PathBuf,

    /// Price elasticity CSV. Not shipped with the repo: supply the export or pass --demo
    #[arg(long, default_value = config::DEFAULT_ELASTICITY_PATH)]
    pub elasticity: PathBuf,

    /// Ignore the paths and use the tables compiled into the binary
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

impl Default for TableArgs {
    fn default() -> Self {
        Self {
            forecast: PathBuf::from(config::DEFAULT_FORECAST_PATH),
            elasticity: PathBuf::from(config::DEFAULT_ELASTICITY_PATH),
            demo: false,
        }
    }
}

impl TableArgs {
    pub fn table_provider(&self) -> Arc<dyn TableProvider> {
        if self.demo {
            Arc::new(DemoTableProvider)
        } else {
            Arc::new(CsvTableProvider::new(&self.forecast, &self.elasticity))
        }
    }

    /// Printed after a failed load so a first run without the exported CSVs points at `--demo`.
    pub fn load_hint(&self) -> Option<&'static str> {
        (!self.demo).then_some("pass --demo to use the tables built into the binary")
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Price-sensitivity forecast simulator", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub tables: TableArgs,
}

impl Cli {
    pub fn table_provider(&self) -> Arc<dyn TableProvider> {
        self.tables.table_provider()
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_point_at_the_data_directory() {
        let cli = Cli::parse_from(["forecast-sim"]);
        assert_eq!(cli.tables.forecast, PathBuf::from(config::DEFAULT_FORECAST_PATH));
        assert_eq!(cli.tables.elasticity, PathBuf::from(config::DEFAULT_ELASTICITY_PATH));
        assert!(!cli.tables.demo);
        assert!(cli.table_provider().describe().contains("bajaj_monthly_forecast_with_mape.csv"));
    }

    #[test]
    fn demo_flag_selects_embedded_tables() {
        let cli = Cli::parse_from(["forecast-sim", "--demo"]);
        assert_eq!(cli.table_provider().describe(), "embedded demo tables");
        assert_eq!(cli.tables.load_hint(), None);
    }

    #[test]
    fn path_options_point_first_runs_at_demo() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        for id in ["forecast", "elasticity"] {
            let help = cmd
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_help())
                .map(|help| help.to_string())
                .unwrap_or_default();
            assert!(help.contains("--demo"), "{}: {}", id, help);
        }
        assert!(TableArgs::default().load_hint().is_some_and(|hint| hint.contains("--demo")));
    }
}
