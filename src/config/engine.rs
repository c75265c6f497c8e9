//! Scenario engine constants (Immutable Blueprints)

use crate::config::NegativeForecastPolicy;

pub struct EngineConfig {
    /// Elasticity applied when the table has no row for a (country, model) pair
    pub default_elasticity: f64,
    /// Competitive intensity applied when the row or the whole column is missing
    pub default_comp_intensity: f64,
    /// Display format of a forecast period label, e.g. "Jan-24"
    pub period_format: &'static str,
    /// Two-digit years below this pivot land in the 2000s, the rest in the 1900s
    pub two_digit_year_pivot: u32,
    /// Decimal places used when showing coefficients and the suggested price
    pub display_decimals: usize,
    pub negative_policy: NegativeForecastPolicy,
}

pub const ENGINE: EngineConfig = EngineConfig {
    default_elasticity: -1.0,
    default_comp_intensity: 1.0,
    period_format: "%b-%y",
    two_digit_year_pivot: 69,
    display_decimals: 2,
    negative_policy: NegativeForecastPolicy::Allow,
};
