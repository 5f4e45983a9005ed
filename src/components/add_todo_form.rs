//! Add Todo Form Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::store::use_app_store;

/// Form for creating a todo; re-fetches the list once the server accepts it
#[component]
pub fn AddTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        let client = ctx.client();

        spawn_local(async move {
            if controller::create_todo(&client, store, &title).await {
                set_new_title.set(String::new());
            }
        });
    };

    view! {
        <form id="add-todo-form" class="add-todo-form" on:submit=create_todo>
            <input
                type="text"
                id="title"
                name="title"
                placeholder="What needs to be done?"
                autocomplete="off"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
