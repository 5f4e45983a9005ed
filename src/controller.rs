//! Todo List Controller
//!
//! Operations behind every user gesture. Each one sends its request first and
//! only patches the store once the server confirmed it; failures end in the
//! console log and leave the store as it was.

use log::{debug, error, info};
use leptos::prelude::*;

use crate::api::TodoClient;
use crate::models::{TodoFields, TodoId};
use crate::store::{AppStore, AppStateStoreFields};

/// Fetch the whole list and replace the rendered rows
pub async fn load_and_render(client: &TodoClient, store: AppStore) {
    debug!("[TODOS] Fetching todos from {}", client.base());
    match client.list_todos().await {
        Ok(todos) => {
            info!("[TODOS] Loaded {} todos", todos.len());
            store.rows().write().replace_all(todos);
        }
        Err(e) => error!("[TODOS] Failed to load todos: {e}"),
    }
}

/// Checkbox changed. The checkbox itself is not rolled back on failure.
pub async fn set_completed(client: &TodoClient, store: AppStore, id: TodoId, completed: bool) {
    let snapshot = store.rows().write().begin_request(&id);
    let Some(snapshot) = snapshot else {
        debug!("[TODOS] {id} busy, toggle ignored");
        return;
    };

    let fields = TodoFields { title: &snapshot.title, completed };
    match client.update_todo(&id, &fields).await {
        Ok(()) => store.rows().write().commit_completed(&id, completed),
        Err(e) => {
            error!("[TODOS] Failed to update todo {id}: {e}");
            store.rows().write().end_request(&id);
        }
    }
}

/// Enter pressed in the edit input
pub async fn save_title(client: &TodoClient, store: AppStore, id: TodoId, title: String) {
    let snapshot = store.rows().write().begin_request(&id);
    let Some(snapshot) = snapshot else {
        debug!("[TODOS] {id} busy, edit ignored");
        return;
    };

    let fields = TodoFields { title: &title, completed: snapshot.completed };
    match client.update_todo(&id, &fields).await {
        Ok(()) => store.rows().write().commit_title(&id, title),
        Err(e) => {
            error!("[TODOS] Failed to rename todo {id}: {e}");
            store.rows().write().end_request(&id);
        }
    }
}

/// Delete affordance clicked
pub async fn delete_todo(client: &TodoClient, store: AppStore, id: TodoId) {
    let snapshot = store.rows().write().begin_request(&id);
    if snapshot.is_none() {
        debug!("[TODOS] {id} busy, delete ignored");
        return;
    }

    match client.delete_todo(&id).await {
        Ok(()) => store.rows().update(|rows| {
            rows.remove(&id);
            debug!("[TODOS] Deleted {id}, {} left", rows.len());
        }),
        Err(e) => {
            error!("[TODOS] Failed to delete todo {id}: {e}");
            store.rows().write().end_request(&id);
        }
    }
}

/// Add form submitted. On success the whole list is fetched again so the
/// new todo shows up with its server-assigned id.
///
/// Returns whether the server accepted the todo.
pub async fn create_todo(client: &TodoClient, store: AppStore, title: &str) -> bool {
    match client.create_todo(title).await {
        Ok(()) => {
            load_and_render(client, store).await;
            true
        }
        Err(e) => {
            error!("[TODOS] Failed to create todo: {e}");
            false
        }
    }
}
