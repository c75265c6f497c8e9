// Domain types and value objects
mod elasticity_row;
mod forecast_row;
mod period;

// Re-export commonly used types to the world
pub use elasticity_row::ElasticityRow;
pub use forecast_row::ForecastRow;
pub use period::Period;
