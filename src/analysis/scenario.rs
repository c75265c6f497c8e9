//! The price scenario pipeline as free functions.
//! Every function here is pure: same inputs, same bits out.

use {
    crate::{
        config::DF,
        data::{ElasticityTable, ForecastTable},
        domain::{ForecastRow, Period},
        error::ScenarioError,
        models::{Coefficients, ElasticityLookup, ScenarioResult, Simulation},
    },
    statrs::statistics::Statistics,
};

/// Rows for exactly this (country, model), in stored order. Case-sensitive.
pub fn filter_scenario(
    forecast: &ForecastTable,
    country: &str,
    bike_model: &str,
) -> Result<Vec<ForecastRow>, ScenarioError> {
    let rows: Vec<ForecastRow> = forecast
        .rows()
        .iter()
        .filter(|r| r.matches(country, bike_model))
        .cloned()
        .collect();

    if rows.is_empty() {
        return Err(ScenarioError::NoDataForSelection {
            country: country.to_string(),
            bike_model: bike_model.to_string(),
        });
    }
    Ok(rows)
}

/// Exact-match join on (country, model). Missing pair -> `Defaulted(-1.0, 1.0)`.
pub fn lookup_elasticity(
    elasticity: &ElasticityTable,
    country: &str,
    bike_model: &str,
) -> ElasticityLookup {
    match elasticity.get(country, bike_model) {
        Some(row) => ElasticityLookup::Found(Coefficients::new(row.elasticity, row.comp_intensity)),
        None => ElasticityLookup::Defaulted(Coefficients::DEFAULT),
    }
}

#[inline]
pub fn effective_elasticity(elasticity: f64, comp_intensity: f64) -> f64 {
    elasticity * comp_intensity
}

/// Arithmetic mean of `unit_price`. None for an empty slice.
pub fn mean_unit_price(rows: &[ForecastRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|r| r.unit_price).mean())
}

/// (new - base) / base, with the division guarded.
pub fn price_change_pct(base_price: f64, new_price: f64) -> Result<f64, ScenarioError> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Err(ScenarioError::InvalidBasePrice(base_price));
    }
    if !new_price.is_finite() || new_price <= 0.0 {
        return Err(ScenarioError::InvalidNewPrice(new_price));
    }
    Ok((new_price - base_price) / base_price)
}

/// Apply a price change to every row and return the rows in chronological order.
///
/// adjusted = predicted * (1 + effective_elasticity * pct), revenue = adjusted * new_price.
/// A row whose period label does not parse is dropped and reported, the rest carry on.
pub fn simulate(
    rows: &[ForecastRow],
    base_price: f64,
    new_price: f64,
    effective_elasticity: f64,
) -> Result<Simulation, ScenarioError> {
    let pct = price_change_pct(base_price, new_price)?;
    let factor = 1.0 + effective_elasticity * pct;

    let mut results = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for row in rows {
        let period = match Period::parse(&row.month) {
            Ok(p) => p,
            Err(e) => {
                if DF.log_period_rejections {
                    log::warn!(
                        "Dropping {} / {} row: {}",
                        row.country,
                        row.bike_model,
                        e
                    );
                }
                rejected.push(e);
                continue;
            }
        };

        let adjusted_forecast = row.predicted_units * factor;
        results.push(ScenarioResult {
            period,
            predicted_units: row.predicted_units,
            adjusted_forecast,
            revenue: adjusted_forecast * new_price,
        });
    }

    // Stable: rows sharing a period (should not happen after load validation) keep file order.
    results.sort_by_key(|r| r.period);

    Ok(Simulation {
        price_change_pct: pct,
        results,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::domain::ElasticityRow, approx::assert_relative_eq};

    fn row(month: &str, units: f64, price: f64) -> ForecastRow {
        ForecastRow {
            country: "India".into(),
            bike_model: "Pulsar".into(),
            month: month.into(),
            predicted_units: units,
            unit_price: price,
        }
    }

    fn pulsar_rows() -> Vec<ForecastRow> {
        vec![row("Feb-24", 1100.0, 100.0), row("Jan-24", 1000.0, 100.0)]
    }

    #[test]
    fn worked_example() {
        let eff = effective_elasticity(-1.5, 1.2);
        assert_relative_eq!(eff, -1.8, epsilon = 1e-12);

        let rows = pulsar_rows();
        let base = mean_unit_price(&rows).unwrap();
        assert_relative_eq!(base, 100.0);

        let sim = simulate(&rows, base, 110.0, eff).unwrap();
        assert_relative_eq!(sim.price_change_pct, 0.10, epsilon = 1e-12);
        assert_eq!(sim.results.len(), 2);

        let jan = &sim.results[0];
        assert_eq!(jan.period.to_string(), "Jan-24");
        assert_relative_eq!(jan.adjusted_forecast, 820.0, epsilon = 1e-9);
        assert_relative_eq!(jan.revenue, 90_200.0, epsilon = 1e-6);

        let feb = &sim.results[1];
        assert_eq!(feb.period.to_string(), "Feb-24");
        assert_relative_eq!(feb.adjusted_forecast, 902.0, epsilon = 1e-9);
        assert_relative_eq!(feb.revenue, 99_220.0, epsilon = 1e-6);
    }

    #[test]
    fn identity_price_leaves_units_unchanged() {
        let rows = pulsar_rows();
        let sim = simulate(&rows, 100.0, 100.0, -1.8).unwrap();
        assert_eq!(sim.price_change_pct, 0.0);
        for r in &sim.results {
            assert_eq!(r.adjusted_forecast, r.predicted_units);
        }
    }

    #[test]
    fn simulate_is_deterministic() {
        let rows = pulsar_rows();
        let a = simulate(&rows, 100.0, 123.45, -1.37).unwrap();
        let b = simulate(&rows, 100.0, 123.45, -1.37).unwrap();
        assert_eq!(a, b);
        for (x, y) in a.results.iter().zip(&b.results) {
            assert_eq!(x.adjusted_forecast.to_bits(), y.adjusted_forecast.to_bits());
            assert_eq!(x.revenue.to_bits(), y.revenue.to_bits());
        }
    }

    #[test]
    fn negative_elasticity_is_monotone_in_price() {
        let rows = pulsar_rows();
        let eff = -1.8;
        let mut previous: Option<Vec<f64>> = None;
        for price in [80.0, 95.0, 100.0, 105.0, 130.0] {
            let sim = simulate(&rows, 100.0, price, eff).unwrap();
            let adjusted: Vec<f64> = sim.results.iter().map(|r| r.adjusted_forecast).collect();
            for (r, a) in sim.results.iter().zip(&adjusted) {
                if price > 100.0 {
                    assert!(*a < r.predicted_units);
                } else if price < 100.0 {
                    assert!(*a > r.predicted_units);
                }
            }
            if let Some(prev) = previous {
                assert!(adjusted.iter().zip(&prev).all(|(now, before)| now < before));
            }
            previous = Some(adjusted);
        }
    }

    #[test]
    fn output_is_chronological_whatever_the_input_order() {
        let rows = vec![
            row("Mar-24", 3.0, 10.0),
            row("Nov-23", 1.0, 10.0),
            row("Jan-24", 2.0, 10.0),
            row("Dec-23", 4.0, 10.0),
        ];
        let sim = simulate(&rows, 10.0, 10.0, -1.0).unwrap();
        let periods: Vec<Period> = sim.results.iter().map(|r| r.period).collect();
        assert!(periods.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(periods[0].to_string(), "Nov-23");
    }

    #[test]
    fn bad_period_drops_only_that_row() {
        let rows = vec![row("Jan-24", 1000.0, 100.0), row("Q1-24", 5.0, 100.0), row("Feb-24", 1100.0, 100.0)];
        let sim = simulate(&rows, 100.0, 110.0, -1.8).unwrap();
        assert_eq!(sim.results.len(), 2);
        assert_eq!(
            sim.rejected,
            vec![ScenarioError::InvalidPeriodFormat { label: "Q1-24".into() }]
        );
    }

    #[test]
    fn zero_base_price_is_guarded() {
        let rows = pulsar_rows();
        assert_eq!(simulate(&rows, 0.0, 110.0, -1.8), Err(ScenarioError::InvalidBasePrice(0.0)));
        assert!(matches!(
            simulate(&rows, f64::NAN, 110.0, -1.8),
            Err(ScenarioError::InvalidBasePrice(_))
        ));
        assert_eq!(simulate(&rows, 100.0, -1.0, -1.8), Err(ScenarioError::InvalidNewPrice(-1.0)));
    }

    #[test]
    fn extreme_price_rise_goes_negative_unclamped() {
        let rows = pulsar_rows();
        let sim = simulate(&rows, 100.0, 300.0, -1.8).unwrap();
        assert!(sim.results.iter().all(|r| r.adjusted_forecast < 0.0));
        assert!(sim.results.iter().all(|r| r.revenue < 0.0));
    }

    #[test]
    fn filter_is_exact_and_keeps_stored_order() {
        let table = ForecastTable::new(vec![
            row("Feb-24", 1.0, 1.0),
            ForecastRow { country: "Nepal".into(), ..row("Jan-24", 2.0, 1.0) },
            row("Jan-24", 3.0, 1.0),
        ]);
        let rows = filter_scenario(&table, "India", "Pulsar").unwrap();
        let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, ["Feb-24", "Jan-24"]);

        assert_eq!(
            filter_scenario(&table, "india", "Pulsar"),
            Err(ScenarioError::NoDataForSelection {
                country: "india".into(),
                bike_model: "Pulsar".into()
            })
        );
    }

    #[test]
    fn lookup_falls_back_to_exact_defaults() {
        let table = ElasticityTable::new(
            vec![ElasticityRow {
                country: "India".into(),
                bike_model: "Pulsar".into(),
                elasticity: -1.5,
                comp_intensity: 1.2,
            }],
            true,
        );
        assert_eq!(
            lookup_elasticity(&table, "India", "Pulsar"),
            ElasticityLookup::Found(Coefficients::new(-1.5, 1.2))
        );
        let missing = lookup_elasticity(&table, "India", "Dominar");
        assert!(missing.is_default());
        assert_eq!(missing.coefficients(), Coefficients::new(-1.0, 1.0));
    }

    #[test]
    fn mean_of_empty_selection_is_none() {
        assert_eq!(mean_unit_price(&[]), None);
        let rows = vec![row("Jan-24", 1.0, 100.0), row("Feb-24", 1.0, 110.0)];
        assert_relative_eq!(mean_unit_price(&rows).unwrap(), 105.0);
    }
}
