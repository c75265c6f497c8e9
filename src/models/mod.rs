mod coefficients;
mod result_column;
mod scenario_input;
mod scenario_report;
mod scenario_result;

pub use {
    coefficients::{Coefficients, ElasticityLookup},
    result_column::ResultColumn,
    scenario_input::ScenarioInput,
    scenario_report::ScenarioReport,
    scenario_result::{ScenarioResult, Simulation},
};
