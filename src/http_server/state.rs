//! Shared state handed to every route handler.

use crate::store::{Store, StoreResult};

/// Application state: the store handle, injected into handlers via axum
/// `State` so nothing reaches for ambient globals.
pub struct AppState {
    pub store: Store,
}

impl AppState {
    /// State with an empty store.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// State with the fixture data already loaded.
    pub fn seeded() -> StoreResult<Self> {
        let state = Self::new();
        state.store.seed()?;
        Ok(state)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
