use serde::{Deserialize, Serialize};

/// One estimated price sensitivity for a (country, bike model) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticityRow {
    pub country: String,
    pub bike_model: String,
    /// Usually negative: demand falls as price rises
    pub elasticity: f64,
    pub comp_intensity: f64,
}
