use anyhow::Result;
use folio_runtime::{Config, SessionGate, resolve_data_dir};
use std::path::{Path, PathBuf};

/// Resolved execution environment shared by handlers.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
}

impl ExecutionContext {
    pub fn resolve(explicit_data_dir: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_dir(explicit_data_dir)?;
        let config = Config::load(&data_dir)?;
        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gate(&self) -> SessionGate {
        SessionGate::new(&self.data_dir)
    }

    /// Where exports land: configured dir, falling back to the current directory.
    pub fn export_dir(&self) -> PathBuf {
        self.config
            .export
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
