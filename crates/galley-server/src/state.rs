use std::sync::Arc;

use galley_gate::Pipelines;
use galley_store::InMemoryStore;

/// Shared state handed to every handler.
///
/// The store is injected rather than global, so each test can build its own.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<InMemoryStore>,
    pub pipelines: Arc<Pipelines>,
}

impl AppState {
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            store: Arc::new(store),
            pipelines: Arc::new(Pipelines::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InMemoryStore::new())
    }
}
