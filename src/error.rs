//! Named failure conditions for table loading and scenario runs.

use {
    serde::Serialize,
    std::path::PathBuf,
    strum_macros::Display,
    thiserror::Error,
};

/// Which of the two input tables a load error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum TableKind {
    #[strum(to_string = "forecast")]
    Forecast,
    #[strum(to_string = "elasticity")]
    Elasticity,
}

/// Fatal at load time. The cache stays as it was before the attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {table} table at {}: {source}", path.display())]
    Io {
        table: TableKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {table} table: {source}")]
    Csv {
        table: TableKind,
        #[source]
        source: csv::Error,
    },

    #[error("{table} table is missing required column(s): {}", missing.join(", "))]
    Schema {
        table: TableKind,
        missing: Vec<&'static str>,
    },

    #[error("{table} table line {line}: {reason}")]
    MalformedRow {
        table: TableKind,
        line: u64,
        reason: String,
    },

    #[error("{table} table line {line}: duplicate row for {country} / {bike_model} / {month}")]
    DuplicateRow {
        table: TableKind,
        line: u64,
        country: String,
        bike_model: String,
        month: String,
    },
}

/// Conditions that abort (or annotate) a single scenario, never the process.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ScenarioError {
    #[error("No forecast data for {country} / {bike_model}")]
    NoDataForSelection { country: String, bike_model: String },

    #[error("Base price must be a positive number, got {0}")]
    InvalidBasePrice(f64),

    #[error("New price must be a positive number, got {0}")]
    InvalidNewPrice(f64),

    #[error("Unrecognised period '{label}' (expected e.g. Jan-24)")]
    InvalidPeriodFormat { label: String },
}
