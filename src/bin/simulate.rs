//! Headless scenario runner: same tables, same engine, printed instead of drawn.
//!
//!   simulate --country India --bike-model Pulsar --price 110000
//!   simulate --demo --country Nepal --bike-model Platina --json

use anyhow::{Context, Result, bail};
use clap::Parser;
use strum::IntoEnumIterator;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use forecast_sim::{
    NegativeForecastPolicy, ScenarioEngine, ScenarioInput, ScenarioReport, TableArgs, TableCache,
    models::ResultColumn,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run one price scenario from the command line", long_about = None)]
struct Args {
    #[command(flatten)]
    tables: TableArgs,

    /// Country, exactly as written in the forecast table
    #[arg(long)]
    country: String,

    /// Bike model, exactly as written in the forecast table
    #[arg(long)]
    bike_model: String,

    /// New unit price. Defaults to the mean base price (no change).
    #[arg(long)]
    price: Option<f64>,

    /// Floor negative adjusted forecasts (and their revenue) at zero
    #[arg(long, default_value_t = false)]
    clamp_negative: bool,

    /// Print the full report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn render_table(report: &ScenarioReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(ResultColumn::iter().map(|c| c.to_string()));
    for row in &report.results {
        builder.push_record(ResultColumn::iter().map(|c| c.cell(row)));
    }
    builder.push_record([
        "Total".to_string(),
        format!("{:.0}", report.total_predicted_units()),
        format!("{:.2}", report.total_adjusted_units()),
        format!("{:.2}", report.total_revenue()),
    ]);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

fn print_report(report: &ScenarioReport) {
    println!(
        "{} / {}  base {:.2} -> new {:.2} ({:+.2}%)",
        report.input.country,
        report.input.bike_model,
        report.base_price,
        report.new_price,
        report.price_change_pct * 100.0
    );
    for (name, value) in report.diagnostics() {
        println!("  {:<34} {}", name, value);
    }
    if report.lookup.is_default() {
        println!("  (no elasticity estimate for this selection, defaults in use)");
    }
    if report.has_negative_forecast {
        match report.policy {
            NegativeForecastPolicy::Allow => {
                println!("  WARNING: adjusted forecast is negative for at least one month")
            }
            NegativeForecastPolicy::ClampToZero => {
                println!("  WARNING: negative months clamped to zero")
            }
        }
    }
    for rejected in &report.rejected_periods {
        println!("  dropped: {}", rejected);
    }
    println!();
    println!("{}", render_table(report));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut cache = TableCache::new(args.tables.table_provider());
    let tables = cache.tables().with_context(|| match args.tables.load_hint() {
        Some(hint) => format!("Failed to load tables from {} ({})", cache.describe(), hint),
        None => format!("Failed to load tables from {}", cache.describe()),
    })?;
    for warning in &tables.warnings {
        log::warn!("{}", warning);
    }

    let policy = if args.clamp_negative {
        NegativeForecastPolicy::ClampToZero
    } else {
        NegativeForecastPolicy::Allow
    };
    let engine = ScenarioEngine::new(tables).with_policy(policy);

    let mut input = ScenarioInput::new(args.country.as_str(), args.bike_model.as_str());
    if let Some(price) = args.price {
        input = input.with_price(price);
    }

    let report = match engine.run(&input) {
        Ok(report) => report,
        Err(e) => bail!("{}", e),
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print_report(&report);
    }
    Ok(())
}
