mod engine;
mod scenario;

pub use {
    engine::ScenarioEngine,
    scenario::{
        effective_elasticity, filter_scenario, lookup_elasticity, mean_unit_price,
        price_change_pct, simulate,
    },
};
