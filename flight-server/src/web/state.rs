//! Application state for the web layer.

use std::sync::Arc;

use crate::analysis::Analyzer;

/// Shared application state.
///
/// The analyzer is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Query façade over the loaded flight feed
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
