use crate::{
    data::{ScenarioTables, TableProvider, load_tables},
    error::LoadError,
};

// Embed the demo tables (the WASM build has no file system to read from)
const DEMO_FORECAST_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/",
    crate::demo_data_dir!(),
    "/",
    crate::demo_forecast_file!()
));

const DEMO_ELASTICITY_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/",
    crate::demo_data_dir!(),
    "/",
    crate::demo_elasticity_file!()
));

/// Serves the tables compiled into the binary.
pub struct DemoTableProvider;

impl TableProvider for DemoTableProvider {
    fn describe(&self) -> String {
        "embedded demo tables".to_string()
    }

    fn fetch(&self) -> Result<ScenarioTables, LoadError> {
        #[cfg(debug_assertions)]
        log::info!("Loading embedded demo tables...");

        load_tables(DEMO_FORECAST_CSV.as_bytes(), DEMO_ELASTICITY_CSV.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_demo_tables_load_cleanly() {
        let tables = DemoTableProvider.fetch().unwrap();
        assert!(!tables.forecast.is_empty());
        assert!(!tables.elasticity.is_empty());
        assert!(tables.forecast.countries().contains(&"India".to_string()));
    }
}
