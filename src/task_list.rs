use crate::error::{Result, TodoError};
use crate::task::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Tasks in insertion order, serialised as a bare JSON array.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Highest id in the list plus one; gaps left by removals are never reused
    /// unless the highest task itself was removed. `None` once the highest id
    /// is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0).checked_add(1)
    }

    /// Appends a pending task. The list is left untouched when the description
    /// is blank or no id is left to hand out.
    pub fn add_task(&mut self, description: &str) -> Result<&Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TodoError::EmptyDescription);
        }
        let id = self.next_id().ok_or(TodoError::IdsExhausted)?;
        let task = Task {
            id,
            description: description.to_string(),
            status: TaskStatus::Pending,
        };
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Looks a task up by the id exactly as the user typed it.
    pub fn get(&self, key: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| matches_key(t, key))
    }

    /// Replaces the description unless `description` is blank, and always sets
    /// the status. Returns `false` when no task has that id.
    pub fn edit_task(&mut self, key: &str, description: &str, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| matches_key(t, key)) else {
            return false;
        };
        let description = description.trim();
        if !description.is_empty() {
            task.description = description.to_string();
        }
        task.status = status;
        true
    }

    /// Removes the first task with that id.
    pub fn remove_task(&mut self, key: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| matches_key(t, key))?;
        Some(self.tasks.remove(index))
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

// "01" or " 1" do not address task 1.
fn matches_key(task: &Task, key: &str) -> bool {
    task.id.to_string() == key
}
