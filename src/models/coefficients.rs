use {
    crate::config::ENGINE,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// The pair of estimated coefficients applied to a price change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub elasticity: f64,
    pub comp_intensity: f64,
}

impl Coefficients {
    pub const DEFAULT: Self = Self {
        elasticity: ENGINE.default_elasticity,
        comp_intensity: ENGINE.default_comp_intensity,
    };

    pub fn new(elasticity: f64, comp_intensity: f64) -> Self {
        Self {
            elasticity,
            comp_intensity,
        }
    }

    /// elasticity x competitive intensity. Not clamped.
    #[inline]
    pub fn effective(&self) -> f64 {
        crate::analysis::effective_elasticity(self.elasticity, self.comp_intensity)
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = ENGINE.display_decimals;
        write!(
            f,
            "elasticity {:.dp$} x intensity {:.dp$} = {:.dp$}",
            self.elasticity,
            self.comp_intensity,
            self.effective(),
        )
    }
}

/// Result of the elasticity join. `Defaulted` means no row existed and the
/// fallback coefficients were used, which callers should surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "coefficients")]
pub enum ElasticityLookup {
    Found(Coefficients),
    Defaulted(Coefficients),
}

impl ElasticityLookup {
    #[inline]
    pub fn coefficients(&self) -> Coefficients {
        match self {
            Self::Found(c) | Self::Defaulted(c) => *c,
        }
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}
