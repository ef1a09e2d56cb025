//! Shared application state for the memstat server.
//!
//! Holds the one store instance for the process; handlers reach it only
//! through the `MetricStorage` trait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use memstat_core::{MemStorage, MetricStorage};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn MetricStorage>,
}

struct AppStateInner {
    cfg: ServerConfig,
    draining: AtomicBool,
}

impl AppState {
    /// Build state around a fresh, empty in-memory store.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_store(cfg, Arc::new(MemStorage::new()))
    }

    /// Build state around a caller-provided store.
    pub fn with_store(cfg: ServerConfig, store: Arc<dyn MetricStorage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            store,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn MetricStorage {
        self.store.as_ref()
    }

    /// Mark draining state (shutdown in progress).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
