use {
    crate::{
        data::{ScenarioTables, load_tables},
        error::{LoadError, TableKind},
    },
    std::{
        fs::File,
        io::BufReader,
        path::{Path, PathBuf},
    },
};

/// Abstract source of the two input tables.
/// Implementations do the raw read every time; caching is `TableCache`'s job.
pub trait TableProvider: Send + Sync {
    /// Human readable origin, shown in the status bar and logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<ScenarioTables, LoadError>;
}

/// Reads both tables from CSV files on disk.
pub struct CsvTableProvider {
    forecast_path: PathBuf,
    elasticity_path: PathBuf,
}

impl CsvTableProvider {
    pub fn new(forecast_path: impl Into<PathBuf>, elasticity_path: impl Into<PathBuf>) -> Self {
        Self {
            forecast_path: forecast_path.into(),
            elasticity_path: elasticity_path.into(),
        }
    }

    fn open(path: &Path, table: TableKind) -> Result<BufReader<File>, LoadError> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| LoadError::Io {
                table,
                path: path.to_path_buf(),
                source,
            })
    }
}

impl TableProvider for CsvTableProvider {
    fn describe(&self) -> String {
        format!(
            "{} + {}",
            self.forecast_path.display(),
            self.elasticity_path.display()
        )
    }

    fn fetch(&self) -> Result<ScenarioTables, LoadError> {
        let forecast = Self::open(&self.forecast_path, TableKind::Forecast)?;
        let elasticity = Self::open(&self.elasticity_path, TableKind::Elasticity)?;
        load_tables(forecast, elasticity)
    }
}
