//! Runtime configuration
//!
//! Resolved from command-line flags (with environment fallbacks handled by
//! clap) into the catalog source and the data directory.

use crate::catalog::{Catalog, loader};
use crate::error::Result;
use crate::game::{Controller, SystemClock};
use crate::storage::FileStore;
use std::path::PathBuf;
use tracing::info;

/// Data directory used when none is given
pub const DEFAULT_DATA_DIR: &str = ".histodle";

/// Where the event catalog comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl CatalogSource {
    /// Load the catalog this source points at
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::CatalogLoad`] if the data is unreadable.
    pub fn load(&self) -> Result<Catalog> {
        match self {
            Self::Embedded => loader::load_embedded(),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog: CatalogSource,
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Embedded,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new(catalog: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            catalog: catalog.map_or(defaults.catalog, CatalogSource::File),
            data_dir: data_dir.unwrap_or(defaults.data_dir),
        }
    }

    /// Load the catalog, open the store and build a controller
    ///
    /// # Errors
    ///
    /// Returns [`crate::GameError::CatalogLoad`] or
    /// [`crate::GameError::Storage`] when either input is unusable.
    pub fn controller(&self) -> Result<Controller<FileStore, SystemClock>> {
        let catalog = self.catalog.load()?;
        let store = FileStore::open(&self.data_dir)?;
        info!(store = %store.path().display(), events = catalog.len(), "starting");
        Controller::new(catalog, store, SystemClock)
    }
}
