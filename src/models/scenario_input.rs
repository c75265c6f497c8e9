use serde::{Deserialize, Serialize};

/// A single "what if we charged X" request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub country: String,
    pub bike_model: String,
    /// None = simulate at the mean base price of the selection
    pub new_price: Option<f64>,
}

impl ScenarioInput {
    pub fn new(country: impl Into<String>, bike_model: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            bike_model: bike_model.into(),
            new_price: None,
        }
    }

    pub fn with_price(mut self, new_price: f64) -> Self {
        self.new_price = Some(new_price);
        self
    }
}
