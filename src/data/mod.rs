mod cache;
mod demo;
mod loader;
mod provider;
mod tables;

pub use {
    cache::{CacheState, TableCache},
    demo::DemoTableProvider,
    loader::{
        ELASTICITY_COLUMNS, FORECAST_COLUMNS, INTENSITY_COLUMN, load_elasticity_table,
        load_forecast_table, load_tables,
    },
    provider::{CsvTableProvider, TableProvider},
    tables::{ElasticityTable, ForecastTable, ScenarioTables},
};
