use {
    crate::{
        config::DF,
        data::{ScenarioTables, TableProvider},
        error::LoadError,
    },
    std::sync::Arc,
};

#[derive(Clone, Default)]
pub enum CacheState {
    #[default]
    Unloaded,
    Loaded(Arc<ScenarioTables>),
}

/// Session-wide memo of the input tables.
/// Unloaded -> Loaded on first access; Loaded -> Loaded only via `reload`.
pub struct TableCache {
    provider: Arc<dyn TableProvider>,
    state: CacheState,
}

impl TableCache {
    pub fn new(provider: Arc<dyn TableProvider>) -> Self {
        Self {
            provider,
            state: CacheState::Unloaded,
        }
    }

    /// Cached tables, loading them on first use. A failed first load leaves the cache Unloaded.
    pub fn tables(&mut self) -> Result<Arc<ScenarioTables>, LoadError> {
        if let CacheState::Loaded(tables) = &self.state {
            return Ok(Arc::clone(tables));
        }
        self.load()
    }

    /// Re-read the source. On failure the previously loaded tables (if any) stay in place.
    pub fn reload(&mut self) -> Result<Arc<ScenarioTables>, LoadError> {
        if DF.log_loading {
            log::info!("Reloading tables from {}", self.provider.describe());
        }
        self.load()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, CacheState::Loaded(_))
    }

    pub fn state(&self) -> &CacheState {
        &self.state
    }

    pub fn describe(&self) -> String {
        self.provider.describe()
    }

    fn load(&mut self) -> Result<Arc<ScenarioTables>, LoadError> {
        let tables = Arc::new(self.provider.fetch().inspect_err(|e| {
            log::error!("Table load from {} failed: {}", self.provider.describe(), e);
        })?);
        for warning in &tables.warnings {
            log::warn!("{}", warning);
        }
        self.state = CacheState::Loaded(Arc::clone(&tables));
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::data::load_tables,
        std::sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    const FORECAST: &str = "Country,Bike_Model,Month,Predicted_Units,Unit_Price\nIndia,Pulsar,Jan-24,1000,100\n";
    const ELASTICITY: &str = "Country,Bike_Model,Elasticity,Comp_Intensity\nIndia,Pulsar,-1.5,1.2\n";
    const BROKEN: &str = "Country,Bike_Model\nIndia,Pulsar\n";

    /// Counts reads and serves whatever forecast CSV it currently holds.
    struct CountingProvider {
        fetches: AtomicUsize,
        forecast: Mutex<&'static str>,
    }

    impl CountingProvider {
        fn new(forecast: &'static str) -> Arc<Self> {
            Arc::new(Self {
                fetches: AtomicUsize::new(0),
                forecast: Mutex::new(forecast),
            })
        }
    }

    impl TableProvider for CountingProvider {
        fn describe(&self) -> String {
            "counting".into()
        }

        fn fetch(&self) -> Result<ScenarioTables, LoadError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let forecast = *self.forecast.lock().unwrap();
            load_tables(forecast.as_bytes(), ELASTICITY.as_bytes())
        }
    }

    #[test]
    fn loads_once_then_serves_from_cache() {
        let provider = CountingProvider::new(FORECAST);
        let mut cache = TableCache::new(provider.clone());
        assert!(!cache.is_loaded());

        let first = cache.tables().unwrap();
        let second = cache.tables().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 1);

        cache.reload().unwrap();
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failed_first_load_stays_unloaded() {
        let provider = CountingProvider::new(BROKEN);
        let mut cache = TableCache::new(provider.clone());
        assert!(matches!(cache.tables(), Err(LoadError::Schema { .. })));
        assert!(!cache.is_loaded());

        // next access retries
        *provider.forecast.lock().unwrap() = FORECAST;
        assert!(cache.tables().is_ok());
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failed_reload_keeps_previous_tables() {
        let provider = CountingProvider::new(FORECAST);
        let mut cache = TableCache::new(provider.clone());
        let loaded = cache.tables().unwrap();

        *provider.forecast.lock().unwrap() = BROKEN;
        assert!(cache.reload().is_err());
        assert!(cache.is_loaded());
        assert!(Arc::ptr_eq(&loaded, &cache.tables().unwrap()));
    }
}
