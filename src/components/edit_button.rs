//! Edit Button Component
//!
//! Edit affordance of a row: pencil while idle, cross while editing.

use leptos::prelude::*;

#[component]
pub fn EditButton(
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if editing.get() { "todo-edit-cancel" } else { "todo-edit" }
            title=move || if editing.get() { "Cancel" } else { "Edit" }
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            {move || if editing.get() { "✕" } else { "✎" }}
        </button>
    }
}
