//! Todo Row Component
//!
//! One rendered todo: checkbox, title, edit and delete affordances, and the
//! inline edit input while editing.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use crate::components::{DeleteButton, EditButton};
use crate::context::use_app_context;
use crate::controller;
use crate::models::TodoId;
use crate::rows::EditState;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single todo row.
///
/// `title` and `completed` are the values at render time; the list re-renders
/// the row when either is confirmed changed.
#[component]
pub fn TodoRow(id: TodoId, title: String, completed: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = StoredValue::new(id);

    let row = Memo::new(move |_| store.rows().with(|rows| id.with_value(|id| rows.get(id).cloned())));
    let editing = Signal::derive(move || row.with(|r| r.as_ref().is_some_and(|r| r.edit.is_editing())));
    let busy = Signal::derive(move || row.with(|r| r.as_ref().is_some_and(|r| r.busy)));

    let on_change = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        let todo_id = id.get_value();
        let client = ctx.client();
        spawn_local(async move {
            controller::set_completed(&client, store, todo_id, checked).await;
        });
    };

    let on_toggle_edit = move |_: ()| {
        store.rows().write().toggle_edit(&id.get_value());
    };

    let on_delete = move |_: ()| {
        let todo_id = id.get_value();
        let client = ctx.client();
        spawn_local(async move {
            controller::delete_todo(&client, store, todo_id).await;
        });
    };

    view! {
        <li class={if completed { "todo-item completed" } else { "todo-item" }}>
            <label class="todo-label">
                <input
                    type="checkbox"
                    checked=completed
                    prop:disabled=move || busy.get()
                    on:change=on_change
                />
                <span>{title}</span>
                <Show when=move || editing.get()>
                    <EditInput
                        id=id.get_value()
                        initial=row.with_untracked(|r| match r.as_ref().map(|r| &r.edit) {
                            Some(EditState::Editing { draft }) => draft.clone(),
                            _ => String::new(),
                        })
                    />
                </Show>
            </label>
            <EditButton editing=editing on_toggle=on_toggle_edit />
            <DeleteButton disabled=busy on_delete=on_delete />
        </li>
    }
}

/// Inline title input, focused on insertion.
///
/// Enter saves, Escape cancels.
#[component]
fn EditInput(id: TodoId, initial: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = StoredValue::new(id);
    let input_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                debug!("[TODOS] Failed to focus edit input: {e:?}");
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            let title = event_target_value(&ev);
            let todo_id = id.get_value();
            let client = ctx.client();
            spawn_local(async move {
                controller::save_title(&client, store, todo_id, title).await;
            });
        }
        "Escape" => store.rows().write().cancel_edit(&id.get_value()),
        _ => {}
    };

    view! {
        <input
            type="text"
            class="todo-edit-input"
            node_ref=input_ref
            value=initial
            on:input=move |ev| store.rows().write().set_draft(&id.get_value(), event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}
