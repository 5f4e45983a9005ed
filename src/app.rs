//! Todo List App
//!
//! Root component: owns the store and fetches the list once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::TodoClient;
use crate::components::{AddTodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(TodoClient::new(&config.api_base));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Fetch on mount; later fetches come from the add form
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            controller::load_and_render(&client, store).await;
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <AddTodoForm />
            <TodoList />
        </main>
    }
}
