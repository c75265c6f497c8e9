mod phases;
mod root;
mod state;

pub(crate) use state::{
    AppState, FailedState, LoadOutcome, LoadingState, PersistedSelection, RunningState, Selection,
};

pub use root::App;
