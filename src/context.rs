//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::TodoClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client for the todo resource, created once per page
    client: StoredValue<TodoClient, LocalStorage>,
}

impl AppContext {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client: StoredValue::new_local(client),
        }
    }

    /// Client handle to move into an async task
    pub fn client(&self) -> TodoClient {
        self.client.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
