//! Frontend Models
//!
//! Data structures matching the `/todos` resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
///
/// Opaque to the client: JSON numbers and strings are both accepted and kept
/// in their textual form, which is what ends up in `/todos/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawTodoId")]
pub struct TodoId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTodoId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawTodoId> for TodoId {
    fn from(raw: RawTodoId) -> Self {
        match raw {
            RawTodoId::Number(n) => Self(n.to_string()),
            RawTodoId::Text(s) => Self(s),
        }
    }
}

impl TodoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Todo data structure (matches server)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Body of `POST /todos` and `PATCH /todos/{id}`.
///
/// Never carries an id; the server assigns it.
#[derive(Debug, Serialize)]
pub struct TodoFields<'a> {
    pub title: &'a str,
    pub completed: bool,
}

impl<'a> TodoFields<'a> {
    /// Body for a freshly created todo
    pub fn new_todo(title: &'a str) -> Self {
        Self { title, completed: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_list_accepts_numeric_and_string_ids() {
        let json = r#"[
            {"id": 7, "title": "Buy milk", "completed": false},
            {"id": "a1b2", "title": "Walk dog", "completed": true}
        ]"#;

        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id.as_str(), "7");
        assert_eq!(todos[0].title, "Buy milk");
        assert!(!todos[0].completed);
        assert_eq!(todos[1].id, TodoId::from("a1b2"));
        assert!(todos[1].completed);
    }

    #[test]
    fn test_todo_ignores_unknown_fields() {
        let json = r#"{"id": 1, "title": "x", "completed": false, "owner": "bob"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id.to_string(), "1");
    }

    #[test]
    fn test_todo_missing_completed_is_rejected() {
        let json = r#"{"id": 1, "title": "x"}"#;
        assert!(serde_json::from_str::<Todo>(json).is_err());
    }

    #[test]
    fn test_create_body_has_no_id() {
        let body = serde_json::to_string(&TodoFields::new_todo("Buy milk")).unwrap();
        assert_eq!(body, r#"{"title":"Buy milk","completed":false}"#);
    }

    #[test]
    fn test_update_body_keeps_title_and_flag() {
        let body = serde_json::to_string(&TodoFields { title: "Walk dog", completed: true }).unwrap();
        assert_eq!(body, r#"{"title":"Walk dog","completed":true}"#);
    }
}
