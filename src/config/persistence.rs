//! File locations for the input tables and the persisted UI state.

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
};

// Default input tables. clap wants plain &'static str defaults, hence the macros.
pub const DEFAULT_FORECAST_PATH: &str = concat!(crate::data_dir!(), "/", crate::forecast_file!());
pub const DEFAULT_ELASTICITY_PATH: &str = concat!(crate::data_dir!(), "/", crate::elasticity_file!());

// --- MACROS FOR COMPILE-TIME INCLUDES ---
// These allow include_str! to read "variables" by expanding them as literals.

#[macro_export]
macro_rules! data_dir {
    () => { "data" };
}

#[macro_export]
macro_rules! forecast_file {
    () => { "bajaj_monthly_forecast_with_mape.csv" };
}

#[macro_export]
macro_rules! elasticity_file {
    () => { "Adj_Price_Elasticity.csv" };
}

#[macro_export]
macro_rules! demo_data_dir {
    () => { "data/demo" };
}

#[macro_export]
macro_rules! demo_forecast_file {
    () => { "demo_forecast.csv" };
}

#[macro_export]
macro_rules! demo_elasticity_file {
    () => { "demo_elasticity.csv" };
}
