//! Row Snapshots
//!
//! Controller-owned mapping from todo id to what its row currently shows,
//! plus the per-row edit state machine. Rows keep the server's order.
//!
//! Nothing here talks to the network: the controller asks for a snapshot
//! before a request and reports the outcome afterwards.

use crate::models::{Todo, TodoId};

/// Edit affordance state of a row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    /// Inline input is open; `draft` is its current text
    Editing { draft: String },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// Values a request is built from, taken when the request starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub title: String,
    pub completed: bool,
}

/// One rendered todo
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub edit: EditState,
    /// A mutation for this todo is in flight
    pub busy: bool,
}

impl From<Todo> for Row {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            completed: todo.completed,
            edit: EditState::Idle,
            busy: false,
        }
    }
}

/// What the list area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// No successful fetch yet: neither list nor placeholder
    Pending,
    /// Placeholder shown, list container hidden
    Empty,
    /// List shown, placeholder hidden
    Populated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoRows {
    loaded: bool,
    rows: Vec<Row>,
}

impl TodoRows {
    /// Replace everything with a freshly fetched list
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.loaded = true;
        self.rows = todos.into_iter().map(Row::from).collect();
    }

    /// Rows in display order
    pub fn as_slice(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn visibility(&self) -> Visibility {
        match (self.loaded, self.rows.is_empty()) {
            (false, _) => Visibility::Pending,
            (true, true) => Visibility::Empty,
            (true, false) => Visibility::Populated,
        }
    }

    pub fn get(&self, id: &TodoId) -> Option<&Row> {
        self.rows.iter().find(|r| &r.id == id)
    }

    fn get_mut(&mut self, id: &TodoId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| &r.id == id)
    }

    /// Number of todos not yet completed
    pub fn remaining(&self) -> usize {
        self.rows.iter().filter(|r| !r.completed).count()
    }

    // ========================
    // Edit state machine
    // ========================

    /// Click on the edit affordance: Idle opens the input, Editing discards it.
    /// Returns the new state, or `None` for an unknown id.
    pub fn toggle_edit(&mut self, id: &TodoId) -> Option<EditState> {
        let row = self.get_mut(id)?;
        row.edit = match row.edit {
            EditState::Idle => EditState::Editing { draft: row.title.clone() },
            EditState::Editing { .. } => EditState::Idle,
        };
        Some(row.edit.clone())
    }

    /// Leave editing without saving
    pub fn cancel_edit(&mut self, id: &TodoId) {
        if let Some(row) = self.get_mut(id) {
            row.edit = EditState::Idle;
        }
    }

    pub fn set_draft(&mut self, id: &TodoId, text: String) {
        if let Some(row) = self.get_mut(id) {
            if let EditState::Editing { draft } = &mut row.edit {
                *draft = text;
            }
        }
    }

    // ========================
    // Request bookkeeping
    // ========================

    /// Mark the row busy and hand out its snapshot.
    ///
    /// `None` if the row is gone or another mutation for it is in flight.
    pub fn begin_request(&mut self, id: &TodoId) -> Option<Snapshot> {
        let row = self.get_mut(id)?;
        if row.busy {
            return None;
        }
        row.busy = true;
        Some(Snapshot {
            title: row.title.clone(),
            completed: row.completed,
        })
    }

    /// Request failed: row keeps its snapshot and edit state
    pub fn end_request(&mut self, id: &TodoId) {
        if let Some(row) = self.get_mut(id) {
            row.busy = false;
        }
    }

    /// Toggle confirmed
    pub fn commit_completed(&mut self, id: &TodoId, completed: bool) {
        if let Some(row) = self.get_mut(id) {
            row.completed = completed;
            row.busy = false;
        }
    }

    /// Title edit confirmed: label takes the new text, input closes
    pub fn commit_title(&mut self, id: &TodoId, title: String) {
        if let Some(row) = self.get_mut(id) {
            row.title = title;
            row.edit = EditState::Idle;
            row.busy = false;
        }
    }

    /// Delete confirmed
    pub fn remove(&mut self, id: &TodoId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| &r.id != id);
        self.rows.len() != before
    }
}
