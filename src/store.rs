//! Application State Store
//!
//! Uses Leptos reactive_stores for the rendered rows.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::rows::TodoRows;

/// State owned by the controller for the lifetime of the page
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered todos and their per-row state
    pub rows: TodoRows,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
