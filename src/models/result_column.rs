use {
    crate::models::ScenarioResult,
    strum_macros::{Display, EnumIter},
};

/// Columns of the result table, in display order. Shared by the dashboard grid and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ResultColumn {
    #[strum(to_string = "Month")]
    Month,
    #[strum(to_string = "Predicted_Units")]
    PredictedUnits,
    #[strum(to_string = "Adjusted_Forecast")]
    AdjustedForecast,
    #[strum(to_string = "Revenue")]
    Revenue,
}

impl ResultColumn {
    pub fn cell(&self, row: &ScenarioResult) -> String {
        match self {
            Self::Month => row.period.to_string(),
            Self::PredictedUnits => format!("{:.0}", row.predicted_units),
            Self::AdjustedForecast => format!("{:.2}", row.adjusted_forecast),
            Self::Revenue => format!("{:.2}", row.revenue),
        }
    }

    /// Numeric columns render right-aligned.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Month)
    }
}
