use {
    crate::domain::{ElasticityRow, ForecastRow},
    itertools::Itertools,
    std::collections::HashMap,
};

/// Base forecast rows, in file order.
#[derive(Debug, Clone, Default)]
pub struct ForecastTable {
    rows: Vec<ForecastRow>,
}

impl ForecastTable {
    pub fn new(rows: Vec<ForecastRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct countries, sorted.
    pub fn countries(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.country.as_str())
            .unique()
            .sorted()
            .map(str::to_owned)
            .collect()
    }

    /// Distinct bike models, sorted. Narrowed to models sold in `country` when given.
    pub fn bike_models(&self, country: Option<&str>) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| country.is_none_or(|c| r.country == c))
            .map(|r| r.bike_model.as_str())
            .unique()
            .sorted()
            .map(str::to_owned)
            .collect()
    }
}

/// Elasticity estimates indexed by country then bike model.
#[derive(Debug, Clone, Default)]
pub struct ElasticityTable {
    rows: Vec<ElasticityRow>,
    index: HashMap<String, HashMap<String, usize>>,
    has_intensity_column: bool,
}

impl ElasticityTable {
    /// First row wins for a repeated (country, model) pair.
    pub fn new(rows: Vec<ElasticityRow>, has_intensity_column: bool) -> Self {
        let mut index: HashMap<String, HashMap<String, usize>> = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            index
                .entry(row.country.clone())
                .or_default()
                .entry(row.bike_model.clone())
                .or_insert(i);
        }
        Self {
            rows,
            index,
            has_intensity_column,
        }
    }

    pub fn get(&self, country: &str, bike_model: &str) -> Option<&ElasticityRow> {
        self.index
            .get(country)
            .and_then(|models| models.get(bike_model))
            .map(|&i| &self.rows[i])
    }

    pub fn rows(&self) -> &[ElasticityRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// False when the source had no Comp_Intensity column at all.
    pub fn has_intensity_column(&self) -> bool {
        self.has_intensity_column
    }
}

/// Both input tables as loaded, plus the warnings raised for rows that were dropped or patched.
#[derive(Debug, Clone, Default)]
pub struct ScenarioTables {
    pub forecast: ForecastTable,
    pub elasticity: ElasticityTable,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(country: &str, model: &str, month: &str) -> ForecastRow {
        ForecastRow {
            country: country.into(),
            bike_model: model.into(),
            month: month.into(),
            predicted_units: 10.0,
            unit_price: 100.0,
        }
    }

    fn e(country: &str, model: &str, elasticity: f64) -> ElasticityRow {
        ElasticityRow {
            country: country.into(),
            bike_model: model.into(),
            elasticity,
            comp_intensity: 1.0,
        }
    }

    #[test]
    fn selector_lists_are_distinct_and_sorted() {
        let table = ForecastTable::new(vec![
            f("Nepal", "Pulsar", "Jan-24"),
            f("India", "Pulsar", "Jan-24"),
            f("India", "Dominar", "Jan-24"),
            f("India", "Pulsar", "Feb-24"),
        ]);
        assert_eq!(table.countries(), ["India", "Nepal"]);
        assert_eq!(table.bike_models(None), ["Dominar", "Pulsar"]);
        assert_eq!(table.bike_models(Some("Nepal")), ["Pulsar"]);
        assert!(table.bike_models(Some("Peru")).is_empty());
    }

    #[test]
    fn elasticity_lookup_is_exact_and_first_row_wins() {
        let table = ElasticityTable::new(
            vec![
                e("India", "Pulsar", -1.5),
                e("India", "Pulsar", -9.0),
                e("Nepal", "Pulsar", -0.7),
            ],
            true,
        );
        assert_eq!(table.get("India", "Pulsar").map(|r| r.elasticity), Some(-1.5));
        assert!(table.get("india", "Pulsar").is_none());
        assert!(table.get("Nepal", "Dominar").is_none());
    }
}
