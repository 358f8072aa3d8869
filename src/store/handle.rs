//! Load-once handle with a single readiness transition.
//!
//! A handle starts empty. The first successful `load` stores the
//! dashboard and every clone of the handle sees it from then on.
//! Concurrent loaders block on the one in progress, so the source is
//! read at most once. Queries before that get `StoreError::NotReady`.

use super::dashboard::Dashboard;
use crate::dataset::DatasetSource;
use crate::utils::config::DashboardConfig;
use crate::utils::error::StoreError;
use log::debug;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Shared entry point to the dashboard data
#[derive(Debug, Clone, Default)]
pub struct DashboardHandle {
    cell: Arc<OnceCell<Arc<Dashboard>>>,
    config: DashboardConfig,
}

impl DashboardHandle {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            cell: Arc::new(OnceCell::new()),
            config,
        }
    }

    /// Load the dataset once and resolve readiness
    ///
    /// **Public** - the returned dashboard is the readiness signal
    ///
    /// Once ready, later calls return the same dashboard without touching
    /// the source again.
    ///
    /// # Errors
    /// * `StoreError::Load` - the source failed to load or validate
    pub fn load(&self, source: &dyn DatasetSource) -> Result<Arc<Dashboard>, StoreError> {
        if let Some(ready) = self.cell.get() {
            debug!("Dashboard already loaded, skipping {}", source.describe());
            return Ok(Arc::clone(ready));
        }

        let dashboard = self.cell.get_or_try_init(|| {
            Dashboard::from_source(source, self.config.clone()).map(Arc::new)
        })?;

        Ok(Arc::clone(dashboard))
    }

    /// Block until some clone of this handle has loaded the dashboard
    ///
    /// **Public** - readiness signal for consumers that never load
    pub fn wait(&self) -> Arc<Dashboard> {
        Arc::clone(self.cell.wait())
    }

    /// The ready dashboard
    ///
    /// # Errors
    /// * `StoreError::NotReady` - `load` has not completed
    pub fn get(&self) -> Result<Arc<Dashboard>, StoreError> {
        self.cell.get().map(Arc::clone).ok_or(StoreError::NotReady)
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}
