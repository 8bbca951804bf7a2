use crate::store::Store;
use std::sync::Arc;

/// Shared state handed to every handler.
///
/// The storage backend is injected behind `Arc<dyn Store>` rather than
/// held as a process-wide singleton, so tests can swap in
/// [`crate::store::MemoryStore`].
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}
