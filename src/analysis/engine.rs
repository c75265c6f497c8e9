use {
    crate::{
        analysis::{filter_scenario, lookup_elasticity, mean_unit_price, simulate},
        config::{DF, ENGINE, NegativeForecastPolicy},
        data::ScenarioTables,
        error::ScenarioError,
        models::{ScenarioInput, ScenarioReport},
        utils::round_to,
    },
    std::sync::Arc,
};

/// Runs scenarios against a loaded table pair. Cheap to clone; tables are shared read-only.
#[derive(Clone)]
pub struct ScenarioEngine {
    tables: Arc<ScenarioTables>,
    policy: NegativeForecastPolicy,
}

impl ScenarioEngine {
    pub fn new(tables: Arc<ScenarioTables>) -> Self {
        Self {
            tables,
            policy: ENGINE.negative_policy,
        }
    }

    pub fn with_policy(mut self, policy: NegativeForecastPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: NegativeForecastPolicy) {
        self.policy = policy;
    }

    pub fn policy(&self) -> NegativeForecastPolicy {
        self.policy
    }

    pub fn tables(&self) -> &ScenarioTables {
        &self.tables
    }

    pub fn countries(&self) -> Vec<String> {
        self.tables.forecast.countries()
    }

    pub fn bike_models(&self, country: Option<&str>) -> Vec<String> {
        self.tables.forecast.bike_models(country)
    }

    /// Mean base price of a selection, i.e. the default for the price entry.
    pub fn base_price(&self, country: &str, bike_model: &str) -> Result<f64, ScenarioError> {
        let rows = filter_scenario(&self.tables.forecast, country, bike_model)?;
        mean_unit_price(&rows).ok_or(ScenarioError::InvalidBasePrice(f64::NAN))
    }

    /// `base_price` rounded the way the price entry displays it.
    pub fn suggested_price(&self, country: &str, bike_model: &str) -> Result<f64, ScenarioError> {
        self.base_price(country, bike_model)
            .map(|p| round_to(p, ENGINE.display_decimals as u32))
    }

    /// filter -> lookup -> effective elasticity -> simulate -> policy.
    pub fn run(&self, input: &ScenarioInput) -> Result<ScenarioReport, ScenarioError> {
        let rows = filter_scenario(&self.tables.forecast, &input.country, &input.bike_model)?;

        let lookup = lookup_elasticity(&self.tables.elasticity, &input.country, &input.bike_model);
        if lookup.is_default() && DF.log_simulation {
            log::warn!(
                "No elasticity row for {} / {}; using defaults",
                input.country,
                input.bike_model
            );
        }
        let effective_elasticity = lookup.coefficients().effective();

        let base_price = mean_unit_price(&rows).ok_or(ScenarioError::InvalidBasePrice(f64::NAN))?;
        let new_price = input.new_price.unwrap_or(base_price);

        let mut simulation = simulate(&rows, base_price, new_price, effective_elasticity)?;

        let has_negative_forecast = simulation
            .results
            .iter()
            .any(|r| r.adjusted_forecast < 0.0);

        if self.policy != NegativeForecastPolicy::Allow {
            for r in &mut simulation.results {
                r.adjusted_forecast = self.policy.apply(r.adjusted_forecast);
                r.revenue = r.adjusted_forecast * new_price;
            }
        }

        if DF.log_simulation {
            log::info!(
                "Scenario {} / {} @ {:.2} (base {:.2}, eff {:.2}): {} rows, {} rejected",
                input.country,
                input.bike_model,
                new_price,
                base_price,
                effective_elasticity,
                simulation.results.len(),
                simulation.rejected.len()
            );
        }

        Ok(ScenarioReport {
            input: ScenarioInput {
                new_price: Some(new_price),
                ..input.clone()
            },
            lookup,
            effective_elasticity,
            base_price,
            new_price,
            price_change_pct: simulation.price_change_pct,
            results: simulation.results,
            rejected_periods: simulation.rejected,
            policy: self.policy,
            has_negative_forecast,
        })
    }
}
