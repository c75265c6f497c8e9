use {
    crate::{
        config::{ENGINE, NegativeForecastPolicy},
        error::ScenarioError,
        models::{ElasticityLookup, ScenarioInput, ScenarioResult},
    },
    serde::Serialize,
};

/// Everything the front ends show for one scenario: the inputs as resolved,
/// the coefficients used, and the adjusted rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub input: ScenarioInput,
    pub lookup: ElasticityLookup,
    pub effective_elasticity: f64,
    pub base_price: f64,
    pub new_price: f64,
    pub price_change_pct: f64,
    pub results: Vec<ScenarioResult>,
    pub rejected_periods: Vec<ScenarioError>,
    pub policy: NegativeForecastPolicy,
    /// True if the raw projection went below zero for any period (before the policy ran)
    pub has_negative_forecast: bool,
}

impl ScenarioReport {
    pub fn total_predicted_units(&self) -> f64 {
        self.results.iter().map(|r| r.predicted_units).sum()
    }

    pub fn total_adjusted_units(&self) -> f64 {
        self.results.iter().map(|r| r.adjusted_forecast).sum()
    }

    pub fn total_revenue(&self) -> f64 {
        self.results.iter().map(|r| r.revenue).sum()
    }

    /// Revenue the base forecast would earn at the base price.
    pub fn baseline_revenue(&self) -> f64 {
        self.total_predicted_units() * self.base_price
    }

    /// (elasticity, comp_intensity, effective_elasticity), formatted for display.
    pub fn diagnostics(&self) -> [(&'static str, String); 3] {
        let dp = ENGINE.display_decimals;
        let c = self.lookup.coefficients();
        [
            ("Price Elasticity", format!("{:.dp$}", c.elasticity)),
            ("Competitive Intensity Multiplier", format!("{:.dp$}", c.comp_intensity)),
            ("Effective Elasticity", format!("{:.dp$}", self.effective_elasticity)),
        ]
    }
}
