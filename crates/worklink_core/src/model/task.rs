//! Task domain model.
//!
//! # Invariants
//! - `proj` is the lookup key and never changes after creation.
//! - `userids` is an ordered, duplicate-free assignment list; it grows only
//!   through the link operation.

use serde::{Deserialize, Serialize};

/// Work-item record looked up by `proj`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSchema {
    /// Work-item category code.
    pub category: i64,
    /// Project key, the lookup key for the assignment flow.
    pub proj: String,
    /// Ordered list of linked user ids, oldest first.
    #[serde(default)]
    pub userids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::TaskSchema;

    #[test]
    fn serializes_with_contract_field_names() {
        let task = TaskSchema {
            category: 2,
            proj: "10".to_string(),
            userids: vec!["u-1".to_string()],
        };

        let value = serde_json::to_value(&task).expect("task should serialize");
        assert_eq!(value["category"], 2);
        assert_eq!(value["proj"], "10");
        assert_eq!(value["userids"][0], "u-1");
    }

    #[test]
    fn userids_defaults_to_empty_on_deserialize() {
        let task: TaskSchema =
            serde_json::from_str(r#"{"category":0,"proj":"10"}"#).expect("task should parse");
        assert!(task.userids.is_empty());
    }
}
