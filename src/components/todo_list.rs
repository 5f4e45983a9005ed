//! Todo List Component
//!
//! List container, empty-state placeholder and remaining counter.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::rows::Visibility;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visibility = Memo::new(move |_| store.rows().with(|rows| rows.visibility()));
    let remaining = Memo::new(move |_| store.rows().with(|rows| rows.remaining()));
    let shown_when = move |wanted: Visibility| move || if visibility.get() == wanted { "block" } else { "none" };

    view! {
        <p class="no-todos" style:display=shown_when(Visibility::Empty)>"Nothing to do."</p>

        <ul class="todos" style:display=shown_when(Visibility::Populated)>
            <For
                each=move || store.rows().with(|rows| rows.as_slice().to_vec())
                // Re-render a row once its confirmed title or state changes
                key=|row| (row.id.clone(), row.title.clone(), row.completed)
                children=move |row| {
                    view! { <TodoRow id=row.id title=row.title completed=row.completed /> }
                }
            />
        </ul>

        <Show when=move || visibility.get() == Visibility::Populated>
            <p class="todo-count">
                {move || match remaining.get() {
                    1 => "1 item left".to_string(),
                    n => format!("{n} items left"),
                }}
            </p>
        </Show>
    }
}
