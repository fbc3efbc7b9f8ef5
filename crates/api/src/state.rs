use std::sync::Arc;

use activities_db::ActivityStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store handle is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Activity store, constructed once at startup and shared by every request.
    pub store: Arc<dyn ActivityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }
}
