use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<Catalog>>,
}

impl AppState {
    /// Wraps a loaded catalog for sharing across handlers.
    ///
    /// Action batches take the write lock, so batches never interleave.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }
}
