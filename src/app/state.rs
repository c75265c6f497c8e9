// src/app/state.rs

use {
    crate::{
        data::{ScenarioTables, TableCache},
        error::LoadError,
    },
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

/// What the loader thread hands back: the cache (so it lives on) and the outcome.
pub(crate) type LoadOutcome = (TableCache, Result<Arc<ScenarioTables>, LoadError>);

pub(crate) enum AppState {
    Loading(LoadingState),
    Running(RunningState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct LoadingState {
    pub(crate) source: String,
    pub(crate) reload: bool,
}

#[derive(Clone)]
pub(crate) struct RunningState;

#[derive(Default, Clone)]
pub(crate) struct FailedState {
    pub(crate) source: String,
    pub(crate) message: String,
}

/// Live selection. Price is only sent to the engine once the user has edited it,
/// so an untouched entry simulates at the exact (unrounded) base price.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    pub(crate) country: Option<String>,
    pub(crate) bike_model: Option<String>,
    pub(crate) price: f64,
    pub(crate) price_edited: bool,
}

/// Persisted user intent (thin, serializable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedSelection {
    pub country: Option<String>,
    pub bike_model: Option<String>,
}
