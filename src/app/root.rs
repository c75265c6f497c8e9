use {
    eframe::{
        Frame, Storage,
        egui::Context,
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{
            Arc,
            mpsc::{self, Receiver, TryRecvError},
        },
    },
};

use crate::{
    Cli,
    analysis::ScenarioEngine,
    app::{
        AppState, FailedState, LoadOutcome, LoadingState, PersistedSelection, RunningState,
        Selection, phases::PhaseView,
    },
    config::{DF, ENGINE, NegativeForecastPolicy},
    data::{ScenarioTables, TableCache, TableProvider},
    error::ScenarioError,
    models::{ScenarioInput, ScenarioReport},
    trace_time,
    ui::{render_failed, render_loading, setup_custom_visuals},
    utils::now_local_string,
};

#[cfg(not(target_arch = "wasm32"))]
use std::thread;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) persisted_selection: PersistedSelection,
    pub(crate) filter_models_by_country: bool,
    pub(crate) negative_policy: NegativeForecastPolicy,
    pub(crate) show_chart: bool,
    #[serde(skip)]
    pub(crate) selection: Selection,
    #[serde(skip)]
    pub(crate) engine: Option<ScenarioEngine>,
    #[serde(skip)]
    pub(crate) report: Option<Result<ScenarioReport, ScenarioError>>,
    #[serde(skip)]
    pub(crate) provider: Option<Arc<dyn TableProvider>>,
    #[serde(skip)]
    pub(crate) cache: Option<TableCache>,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<LoadOutcome>>,
    #[serde(skip)]
    pub(crate) loaded_at: Option<String>,
    #[serde(skip)]
    pub(crate) last_load_error: Option<String>,
    #[serde(skip)]
    pub(crate) reload_requested: bool,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            persisted_selection: PersistedSelection::default(),
            filter_models_by_country: true,
            negative_policy: ENGINE.negative_policy,
            show_chart: true,
            selection: Selection::default(),
            engine: None,
            report: None,
            provider: None,
            cache: None,
            data_rx: None,
            loaded_at: None,
            last_load_error: None,
            reload_requested: false,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let provider = args.table_provider();
        app.cache = Some(TableCache::new(Arc::clone(&provider)));
        app.provider = Some(provider);
        app.state = app.start_load(false);
        app
    }

    /// Hands the cache to a loader (a thread on native, inline on WASM) and enters Loading.
    pub(crate) fn start_load(&mut self, reload: bool) -> AppState {
        let mut cache = match (self.cache.take(), &self.provider) {
            (Some(cache), _) => cache,
            // Loader died without handing the cache back: start from a fresh, Unloaded one.
            (None, Some(provider)) => TableCache::new(Arc::clone(provider)),
            (None, None) => {
                return AppState::Failed(FailedState {
                    source: String::new(),
                    message: "No table source configured".to_string(),
                });
            }
        };

        let source = cache.describe();
        if DF.log_loading {
            log::info!("{} tables from {}", if reload { "Reloading" } else { "Loading" }, source);
        }

        let (data_tx, data_rx) = mpsc::channel();
        self.data_rx = Some(data_rx);

        #[cfg(not(target_arch = "wasm32"))]
        thread::spawn(move || {
            let result = if reload { cache.reload() } else { cache.tables() };
            let _ = data_tx.send((cache, result));
        });

        #[cfg(target_arch = "wasm32")]
        {
            let result = if reload { cache.reload() } else { cache.tables() };
            let _ = data_tx.send((cache, result));
        }

        AppState::Loading(LoadingState { source, reload })
    }

    pub(crate) fn finalize_load_if_ready(&mut self) -> Option<AppState> {
        let rx = self.data_rx.as_ref()?;
        let (cache, result) = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                self.data_rx = None;
                return Some(self.load_failed(
                    String::new(),
                    "Table loader stopped before reporting back".to_string(),
                ));
            }
        };
        self.data_rx = None;
        let source = cache.describe();
        self.cache = Some(cache);

        Some(match result {
            Ok(tables) => {
                self.install_tables(tables);
                AppState::Running(RunningState)
            }
            Err(e) => self.load_failed(source, e.to_string()),
        })
    }

    /// First load failing is fatal for the session view; a failed reload keeps the old tables.
    fn load_failed(&mut self, source: String, message: String) -> AppState {
        if self.engine.is_some() {
            self.last_load_error = Some(message);
            AppState::Running(RunningState)
        } else {
            AppState::Failed(FailedState { source, message })
        }
    }

    fn install_tables(&mut self, tables: Arc<ScenarioTables>) {
        self.engine = Some(ScenarioEngine::new(tables).with_policy(self.negative_policy));
        self.loaded_at = Some(now_local_string());
        self.last_load_error = None;
        self.restore_selection();
        self.recompute();
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, state: &mut LoadingState) -> AppState {
        ctx.request_repaint();
        if let Some(next_state) = self.finalize_load_if_ready() {
            return next_state;
        }
        render_loading(ctx, state);
        AppState::Loading(state.clone())
    }

    pub(crate) fn tick_failed_state(&mut self, ctx: &Context, state: &mut FailedState) -> AppState {
        if render_failed(ctx, state) {
            return self.start_load(false);
        }
        AppState::Failed(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) -> AppState {
        self.render_top_panel(ctx);
        self.render_left_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        if mem::take(&mut self.reload_requested) {
            return self.start_load(true);
        }
        AppState::Running(RunningState)
    }

    /// Model choices for the current country (or all models when the filter is off).
    pub(crate) fn model_choices(&self) -> Vec<String> {
        let Some(engine) = &self.engine else {
            return Vec::new();
        };
        let country = self
            .selection
            .country
            .as_deref()
            .filter(|_| self.filter_models_by_country);
        engine.bike_models(country)
    }

    fn restore_selection(&mut self) {
        let Some(engine) = &self.engine else {
            return;
        };
        let countries = engine.countries();

        let wanted = self
            .selection
            .country
            .clone()
            .or_else(|| self.persisted_selection.country.clone());
        self.selection.country = wanted
            .filter(|c| countries.contains(c))
            .or_else(|| countries.first().cloned());

        if self.selection.bike_model.is_none() {
            self.selection.bike_model = self.persisted_selection.bike_model.clone();
        }
        self.ensure_valid_model();
        self.reset_price();

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "SELECTION restored to {:?} / {:?}",
                self.selection.country,
                self.selection.bike_model
            );
        }
    }

    /// Heal the model choice after the country or the filter changed.
    fn ensure_valid_model(&mut self) {
        let models = self.model_choices();
        let valid = self
            .selection
            .bike_model
            .as_ref()
            .is_some_and(|m| models.contains(m));
        if !valid {
            #[cfg(debug_assertions)]
            if DF.log_selection {
                log::info!(
                    "SELECTION HEALED: model {:?} not offered; falling back to {:?}",
                    self.selection.bike_model,
                    models.first()
                );
            }
            self.selection.bike_model = models.into_iter().next();
        }
    }

    pub(crate) fn select_country(&mut self, country: String) {
        self.selection.country = Some(country);
        self.ensure_valid_model();
        self.reset_price();
        self.recompute();
    }

    pub(crate) fn select_bike_model(&mut self, bike_model: String) {
        self.selection.bike_model = Some(bike_model);
        self.reset_price();
        self.recompute();
    }

    pub(crate) fn set_filter_models_by_country(&mut self, on: bool) {
        self.filter_models_by_country = on;
        let before = self.selection.bike_model.clone();
        self.ensure_valid_model();
        if before != self.selection.bike_model {
            self.reset_price();
        }
        self.recompute();
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.selection.price = price;
        self.selection.price_edited = true;
        self.recompute();
    }

    pub(crate) fn set_negative_policy(&mut self, policy: NegativeForecastPolicy) {
        self.negative_policy = policy;
        if let Some(engine) = &mut self.engine {
            engine.set_policy(policy);
        }
        self.recompute();
    }

    /// Back to the selection's mean base price, rounded for display.
    pub(crate) fn reset_price(&mut self) {
        self.selection.price_edited = false;
        self.selection.price = match (&self.engine, &self.selection.country, &self.selection.bike_model) {
            (Some(engine), Some(country), Some(model)) => {
                engine.suggested_price(country, model).unwrap_or(0.0)
            }
            _ => 0.0,
        };
    }

    pub(crate) fn recompute(&mut self) {
        let (Some(engine), Some(country), Some(model)) = (
            &self.engine,
            &self.selection.country,
            &self.selection.bike_model,
        ) else {
            self.report = None;
            return;
        };

        let mut input = ScenarioInput::new(country.as_str(), model.as_str());
        if self.selection.price_edited {
            input = input.with_price(self.selection.price);
        }

        let report = trace_time!("scenario run", 2_000, { engine.run(&input) });
        if let Err(e) = &report {
            log::warn!("Scenario not computed: {}", e);
        }
        self.report = Some(report);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.persisted_selection = PersistedSelection {
            country: self.selection.country.clone(),
            bike_model: self.selection.bike_model.clone(),
        };
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "💾 SAVE [App]: PersistedSelection = {:?}",
                self.persisted_selection
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
