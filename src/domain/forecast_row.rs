use serde::{Deserialize, Serialize};

/// One observation of the base (unadjusted) forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub country: String,
    pub bike_model: String,
    /// Raw period label as exported, e.g. "Jan-24". Parsed lazily by the simulator.
    pub month: String,
    pub predicted_units: f64,
    /// Reference price the forecast was produced at
    pub unit_price: f64,
}

impl ForecastRow {
    #[inline]
    pub fn matches(&self, country: &str, bike_model: &str) -> bool {
        self.country == country && self.bike_model == bike_model
    }
}
