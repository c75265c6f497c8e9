//! CSV table loader.
//!
//! Parses the two exported tables into domain rows. Column presence is checked
//! up front against the header row; each record is then validated on its own
//! so the error names the offending line.
//!
//! Forecast columns: Country, Bike_Model, Month, Predicted_Units, Unit_Price
//! Elasticity columns: Country, Bike_Model, Elasticity, [Comp_Intensity]

use {
    crate::{
        config::{DF, ENGINE},
        data::{ElasticityTable, ForecastTable, ScenarioTables},
        domain::{ElasticityRow, ForecastRow, Period},
        error::{LoadError, TableKind},
    },
    csv::StringRecord,
    serde::Deserialize,
    std::{collections::HashSet, io::Read},
};

pub const FORECAST_COLUMNS: [&str; 5] = [
    "Country",
    "Bike_Model",
    "Month",
    "Predicted_Units",
    "Unit_Price",
];
pub const ELASTICITY_COLUMNS: [&str; 3] = ["Country", "Bike_Model", "Elasticity"];
pub const INTENSITY_COLUMN: &str = "Comp_Intensity";

#[derive(Debug, Deserialize)]
struct ForecastRecord {
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Bike_Model")]
    bike_model: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Predicted_Units")]
    predicted_units: Option<f64>,
    #[serde(rename = "Unit_Price")]
    unit_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ElasticityRecord {
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Bike_Model")]
    bike_model: Option<String>,
    #[serde(rename = "Elasticity")]
    elasticity: Option<f64>,
    #[serde(rename = "Comp_Intensity", default)]
    comp_intensity: Option<f64>,
}

/// Duplicate key for the Month column. Labels that parse compare as calendar
/// months ("Jan-24" and "january-24" collide); the rest compare verbatim.
#[derive(Debug, PartialEq, Eq, Hash)]
enum MonthKey {
    Parsed(Period),
    Raw(String),
}

impl MonthKey {
    fn of(label: &str) -> Self {
        Period::parse(label).map_or_else(|_| Self::Raw(label.trim().to_string()), Self::Parsed)
    }
}

/// Load both tables. Any fatal problem in either aborts the whole load.
pub fn load_tables<F: Read, E: Read>(forecast: F, elasticity: E) -> Result<ScenarioTables, LoadError> {
    let mut warnings = Vec::new();
    let forecast = load_forecast_table(forecast, &mut warnings)?;
    let elasticity = load_elasticity_table(elasticity, &mut warnings)?;

    if DF.log_loading {
        log::info!(
            "Loaded {} forecast rows and {} elasticity rows ({} warnings)",
            forecast.len(),
            elasticity.len(),
            warnings.len()
        );
    }

    Ok(ScenarioTables {
        forecast,
        elasticity,
        warnings,
    })
}

pub fn load_forecast_table<R: Read>(
    reader: R,
    warnings: &mut Vec<String>,
) -> Result<ForecastTable, LoadError> {
    let table = TableKind::Forecast;
    let mut csv_reader = csv_reader(reader);
    let headers = read_headers(&mut csv_reader, table)?;
    check_schema(&headers, &FORECAST_COLUMNS, table)?;

    let mut rows = Vec::new();
    let mut seen: HashSet<(String, String, MonthKey)> = HashSet::new();

    for result in csv_reader.records() {
        let record = result.map_err(|source| LoadError::Csv { table, source })?;
        let line = line_of(&record);
        let parsed: ForecastRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(table, line, e.to_string()))?;

        let (Some(country), Some(bike_model), Some(month)) =
            (parsed.country, parsed.bike_model, parsed.month)
        else {
            drop_row(warnings, table, line, "missing Country, Bike_Model or Month");
            continue;
        };

        let predicted_units = parsed
            .predicted_units
            .ok_or_else(|| malformed(table, line, "missing Predicted_Units".into()))?;
        if !predicted_units.is_finite() || predicted_units < 0.0 {
            return Err(malformed(
                table,
                line,
                format!("Predicted_Units must be a non-negative number, got {}", predicted_units),
            ));
        }

        let unit_price = parsed
            .unit_price
            .ok_or_else(|| malformed(table, line, "missing Unit_Price".into()))?;
        if !unit_price.is_finite() || unit_price <= 0.0 {
            return Err(malformed(
                table,
                line,
                format!("Unit_Price must be a positive number, got {}", unit_price),
            ));
        }

        if !seen.insert((country.clone(), bike_model.clone(), MonthKey::of(&month))) {
            return Err(LoadError::DuplicateRow {
                table,
                line,
                country,
                bike_model,
                month,
            });
        }

        rows.push(ForecastRow {
            country,
            bike_model,
            month,
            predicted_units,
            unit_price,
        });
    }

    Ok(ForecastTable::new(rows))
}

pub fn load_elasticity_table<R: Read>(
    reader: R,
    warnings: &mut Vec<String>,
) -> Result<ElasticityTable, LoadError> {
    let table = TableKind::Elasticity;
    let mut csv_reader = csv_reader(reader);
    let headers = read_headers(&mut csv_reader, table)?;
    check_schema(&headers, &ELASTICITY_COLUMNS, table)?;

    let has_intensity_column = headers.iter().any(|h| h == INTENSITY_COLUMN);
    if !has_intensity_column {
        warnings.push(format!(
            "{} table has no {} column; using {} for every row",
            table, INTENSITY_COLUMN, ENGINE.default_comp_intensity
        ));
    }

    let mut rows: Vec<ElasticityRow> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for result in csv_reader.records() {
        let record = result.map_err(|source| LoadError::Csv { table, source })?;
        let line = line_of(&record);
        let parsed: ElasticityRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(table, line, e.to_string()))?;

        let (Some(country), Some(bike_model)) = (parsed.country, parsed.bike_model) else {
            drop_row(warnings, table, line, "missing Country or Bike_Model");
            continue;
        };

        // A row without a coefficient is as good as no row: the lookup falls back to defaults.
        let Some(elasticity) = parsed.elasticity else {
            drop_row(warnings, table, line, "missing Elasticity");
            continue;
        };
        if !elasticity.is_finite() {
            return Err(malformed(
                table,
                line,
                format!("Elasticity must be a finite number, got {}", elasticity),
            ));
        }

        let comp_intensity = match parsed.comp_intensity {
            Some(v) if v.is_finite() && v > 0.0 => v,
            Some(v) => {
                return Err(malformed(
                    table,
                    line,
                    format!("{} must be a positive number, got {}", INTENSITY_COLUMN, v),
                ));
            }
            None => {
                if has_intensity_column {
                    warnings.push(format!(
                        "{} table line {}: empty {}, using {}",
                        table, line, INTENSITY_COLUMN, ENGINE.default_comp_intensity
                    ));
                }
                ENGINE.default_comp_intensity
            }
        };

        if !seen.insert((country.clone(), bike_model.clone())) {
            drop_row(
                warnings,
                table,
                line,
                &format!("repeats {} / {}, keeping the first row", country, bike_model),
            );
            continue;
        }

        rows.push(ElasticityRow {
            country,
            bike_model,
            elasticity,
            comp_intensity,
        });
    }

    Ok(ElasticityTable::new(rows, has_intensity_column))
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn read_headers<R: Read>(
    csv_reader: &mut csv::Reader<R>,
    table: TableKind,
) -> Result<StringRecord, LoadError> {
    csv_reader
        .headers()
        .cloned()
        .map_err(|source| LoadError::Csv { table, source })
}

fn check_schema(
    headers: &StringRecord,
    required: &[&'static str],
    table: TableKind,
) -> Result<(), LoadError> {
    let missing: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::Schema { table, missing })
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn malformed(table: TableKind, line: u64, reason: String) -> LoadError {
    LoadError::MalformedRow {
        table,
        line,
        reason,
    }
}

fn drop_row(warnings: &mut Vec<String>, table: TableKind, line: u64, reason: &str) {
    let msg = format!("{} table line {}: dropped ({})", table, line, reason);
    if DF.log_loading {
        log::warn!("{}", msg);
    }
    warnings.push(msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_CSV: &str = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price,MAPE
India,Pulsar,Feb-24,1100,100,0.08
India,Pulsar,Jan-24,1000,100,0.07
Nepal,Dominar,Jan-24,250,180,0.12
";

    const ELASTICITY_CSV: &str = "\
Country,Bike_Model,Elasticity,Comp_Intensity
India,Pulsar,-1.5,1.2
Nepal,Dominar,-0.8,0.9
";

    fn forecast(csv: &str) -> Result<ForecastTable, LoadError> {
        load_forecast_table(csv.as_bytes(), &mut Vec::new())
    }

    fn elasticity(csv: &str) -> (Result<ElasticityTable, LoadError>, Vec<String>) {
        let mut warnings = Vec::new();
        let result = load_elasticity_table(csv.as_bytes(), &mut warnings);
        (result, warnings)
    }

    #[test]
    fn loads_sample_tables_and_ignores_extra_columns() {
        let tables = load_tables(FORECAST_CSV.as_bytes(), ELASTICITY_CSV.as_bytes()).unwrap();
        assert_eq!(tables.forecast.len(), 3);
        assert_eq!(tables.forecast.rows()[0].month, "Feb-24");
        assert!((tables.forecast.rows()[1].predicted_units - 1000.0).abs() < 1e-9);
        assert_eq!(tables.elasticity.len(), 2);
        assert!(tables.elasticity.has_intensity_column());
        assert!(tables.warnings.is_empty());
    }

    #[test]
    fn missing_required_column_is_a_schema_error() {
        let err = forecast("Country,Bike_Model,Month,Predicted_Units\nIndia,Pulsar,Jan-24,10\n")
            .unwrap_err();
        match err {
            LoadError::Schema { table, missing } => {
                assert_eq!(table, TableKind::Forecast);
                assert_eq!(missing, vec!["Unit_Price"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_elasticity_column_is_a_schema_error() {
        let (result, _) = elasticity("Country,Bike_Model,Comp_Intensity\nIndia,Pulsar,1.2\n");
        assert!(matches!(
            result,
            Err(LoadError::Schema { table: TableKind::Elasticity, .. })
        ));
    }

    #[test]
    fn missing_price_rejects_the_load_with_line_number() {
        let csv = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price
India,Pulsar,Jan-24,1000,100
India,Pulsar,Feb-24,1100,
";
        match forecast(csv).unwrap_err() {
            LoadError::MalformedRow { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("Unit_Price"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_units_reject_the_load() {
        let csv = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price
India,Pulsar,Jan-24,lots,100
";
        assert!(matches!(forecast(csv), Err(LoadError::MalformedRow { line: 2, .. })));
    }

    #[test]
    fn negative_units_and_zero_price_are_malformed() {
        let negative = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price
India,Pulsar,Jan-24,-5,100
";
        let zero_price = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price
India,Pulsar,Jan-24,5,0
";
        assert!(matches!(forecast(negative), Err(LoadError::MalformedRow { .. })));
        assert!(matches!(forecast(zero_price), Err(LoadError::MalformedRow { .. })));
    }

    #[test]
    fn rows_without_keys_are_dropped_with_a_warning() {
        let csv = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price
India,Pulsar,Jan-24,1000,100
,Pulsar,Feb-24,1100,100
India,,Mar-24,1200,100
";
        let mut warnings = Vec::new();
        let table = load_forecast_table(csv.as_bytes(), &mut warnings).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("line 3"), "{}", warnings[0]);
    }

    #[test]
    fn duplicate_period_for_same_pair_is_rejected() {
        let csv = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price
India,Pulsar,Jan-24,1000,100
India,Pulsar,Jan-24,900,100
";
        assert!(matches!(forecast(csv), Err(LoadError::DuplicateRow { line: 3, .. })));
    }

    #[test]
    fn month_spellings_of_the_same_period_are_duplicates() {
        for variant in ["jan-24", "January-24", "JAN-24"] {
            let csv = format!(
                "Country,Bike_Model,Month,Predicted_Units,Unit_Price\n\
                 India,Pulsar,Jan-24,1000,100\n\
                 India,Pulsar,{},900,100\n",
                variant
            );
            match forecast(&csv) {
                Err(LoadError::DuplicateRow { line, month, .. }) => {
                    assert_eq!(line, 3);
                    assert_eq!(month, variant);
                }
                other => panic!("{:?} loaded as a new period: {:?}", variant, other.map(|t| t.len())),
            }
        }
    }

    #[test]
    fn same_month_for_different_pairs_is_not_a_duplicate() {
        let csv = "\
Country,Bike_Model,Month,Predicted_Units,Unit_Price
India,Pulsar,Jan-24,1000,100
India,Dominar,jan-24,400,200
Nepal,Pulsar,January-24,300,100
";
        assert_eq!(forecast(csv).map(|t| t.len()).ok(), Some(3));
    }

    #[test]
    fn absent_intensity_column_defaults_every_row() {
        let (result, warnings) = elasticity("Country,Bike_Model,Elasticity\nIndia,Pulsar,-1.5\n");
        let table = result.unwrap();
        assert!(!table.has_intensity_column());
        assert_eq!(table.get("India", "Pulsar").map(|r| r.comp_intensity), Some(1.0));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn empty_cells_in_elasticity_table_are_patched_or_dropped() {
        let csv = "\
Country,Bike_Model,Elasticity,Comp_Intensity
India,Pulsar,-1.5,
India,Dominar,,1.3
India,Pulsar,-2.0,1.1
";
        let (result, warnings) = elasticity(csv);
        let table = result.unwrap();
        assert_eq!(table.len(), 1);
        let row = table.get("India", "Pulsar").unwrap();
        assert_eq!((row.elasticity, row.comp_intensity), (-1.5, 1.0));
        assert!(table.get("India", "Dominar").is_none());
        // patched intensity, dropped Dominar, dropped duplicate Pulsar
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn non_positive_intensity_is_malformed() {
        let (result, _) = elasticity("Country,Bike_Model,Elasticity,Comp_Intensity\nIndia,Pulsar,-1.5,0\n");
        assert!(matches!(result, Err(LoadError::MalformedRow { line: 2, .. })));
    }
}
