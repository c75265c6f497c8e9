use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// What to do with an adjusted forecast that went below zero.
/// Strong elasticity plus a big price rise can push the linear model negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display, Default,
)]
pub enum NegativeForecastPolicy {
    /// Keep the raw linear projection, negative values included
    #[default]
    #[strum(to_string = "Allow negative")]
    Allow,
    /// Floor adjusted units (and so revenue) at zero
    #[strum(to_string = "Clamp to zero")]
    ClampToZero,
}

impl NegativeForecastPolicy {
    #[inline]
    pub(crate) fn apply(self, adjusted_units: f64) -> f64 {
        match self {
            Self::Allow => adjusted_units,
            Self::ClampToZero => adjusted_units.max(0.0),
        }
    }
}
