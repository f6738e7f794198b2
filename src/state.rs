//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the concession catalog, and the compiled page
//! template. Everything is immutable after startup, so handlers share it
//! through `Arc` without locking.

use std::sync::Arc;

use crate::catalog::{self, CatalogError, ConcessionName};
use crate::config::{AppConfig, ConfigError};
use crate::grid::{self, Cell, GridError};
use crate::page::{Layout, PageRenderer, RenderError};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("render setup error: {0}")]
    Render(#[from] RenderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub concessions: Arc<Vec<ConcessionName>>,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Build state from an explicit catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the page template fails to compile.
    pub fn new(config: AppConfig, concessions: Vec<ConcessionName>) -> Result<Self, RenderError> {
        Ok(Self {
            config: Arc::new(config),
            concessions: Arc::new(concessions),
            renderer: Arc::new(PageRenderer::new()?),
        })
    }

    /// Build state from config, reading `CONCESSIONS_FILE` when set and
    /// falling back to the reference catalog otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] when the catalog cannot be loaded or the
    /// template fails to compile.
    pub fn from_config(config: AppConfig) -> Result<Self, StartupError> {
        let concessions = match &config.concessions_file {
            Some(path) => catalog::load(path)?,
            None => catalog::reference_names(),
        };
        Ok(Self::new(config, concessions)?)
    }

    /// Capacity for a layout: the catalog length for cards, rows × columns
    /// for the matrix.
    #[must_use]
    pub fn capacity(&self, layout: Layout) -> i64 {
        match layout {
            Layout::Cards => i64::try_from(self.concessions.len()).unwrap_or(i64::MAX),
            Layout::Matrix => self.config.matrix.capacity(),
        }
    }

    /// Populate the cells for one render.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError`] from the populator.
    pub fn cells(&self, layout: Layout) -> Result<Vec<Cell>, GridError> {
        grid::populate(&self.concessions, self.capacity(layout), &self.config.base_url)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
