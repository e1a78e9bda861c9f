use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: TaskStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.pad("Pending"),
            Self::Completed => f.pad("Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_plain_names_on_disk() {
        let task = Task {
            id: 1,
            description: "Buy milk".to_string(),
            status: TaskStatus::Completed,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"description":"Buy milk","status":"Completed"}"#
        );
    }

    #[test]
    fn status_display_honours_padding() {
        assert_eq!(format!("{:<10}|", TaskStatus::Pending), "Pending   |");
    }
}
