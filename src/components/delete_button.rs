//! Delete Button Component
//!
//! Delete affordance of a row.

use leptos::prelude::*;

/// Fires `on_delete` on click; disabled while `disabled` is true
#[component]
pub fn DeleteButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="todo-delete"
            title="Delete"
            prop:disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "×"
        </button>
    }
}
