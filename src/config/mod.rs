//! Configuration module for the forecast simulator.

// Can all be private now because we have a public re-export.
mod debug;
mod engine;
mod persistence;
mod types;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::DF;
pub use engine::{ENGINE, EngineConfig};
pub use persistence::{
    DEFAULT_ELASTICITY_PATH, DEFAULT_FORECAST_PATH, PERSISTENCE, PersistenceConfig,
};
pub use plot::PLOT_CONFIG;
pub use types::NegativeForecastPolicy;
