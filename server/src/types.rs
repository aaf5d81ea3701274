//! Wire types for the todos service.
//!
//! # Design
//! `Todo` is what the store holds and what responses carry. `TodoInput` is
//! the request body for both create and update: update is a full replacement
//! of the mutable fields, so the shapes are identical. The id never appears
//! in a request body — it is assigned by the store and carried in the path.

use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
}

/// Request payload for creating or replacing a todo. `title` is required;
/// `description` defaults to empty and `is_complete` to false when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            is_complete: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "");
        assert_eq!(json["is_complete"], false);
    }

    #[test]
    fn input_defaults_optional_fields() {
        let input: TodoInput = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(input.title, "Only title");
        assert_eq!(input.description, "");
        assert!(!input.is_complete);
    }

    #[test]
    fn input_accepts_all_fields() {
        let input: TodoInput =
            serde_json::from_str(r#"{"title":"Done","description":"already","is_complete":true}"#)
                .unwrap();
        assert_eq!(input.description, "already");
        assert!(input.is_complete);
    }

    #[test]
    fn input_rejects_missing_title() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"is_complete":true}"#);
        assert!(result.is_err());
    }
}
