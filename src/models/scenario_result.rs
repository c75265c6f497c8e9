use {
    crate::{domain::Period, error::ScenarioError},
    serde::Serialize,
};

/// One output row of a scenario, aligned with a base forecast row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub period: Period,
    pub predicted_units: f64,
    /// Not clamped unless a clamping policy is applied afterwards
    pub adjusted_forecast: f64,
    pub revenue: f64,
}

/// Raw output of `simulate`: chronologically ordered rows plus the rows it had to drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub price_change_pct: f64,
    pub results: Vec<ScenarioResult>,
    /// One `InvalidPeriodFormat` per dropped row
    pub rejected: Vec<ScenarioError>,
}
