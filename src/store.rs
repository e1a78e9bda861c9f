use crate::error::Result;
use crate::task_list::TaskList;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Relative to the working directory.
pub const TASKS_FILE: &str = "tasks.json";

#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(TASKS_FILE)
    }
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the task file, falling back to an empty list when it is missing
    /// or cannot be parsed.
    pub fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable task file: {err}");
                TaskList::new()
            }
        }
    }

    /// A missing file is an empty list; anything else that goes wrong is an error.
    pub fn try_load(&self) -> Result<TaskList> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no task file yet");
                return Ok(TaskList::new());
            }
            Err(err) => return Err(err.into()),
        };
        let list: TaskList = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), count = list.len(), "loaded tasks");
        Ok(list)
    }

    /// Writes the whole list through a sibling temp file and renames it into
    /// place, so the previous file survives a failed write.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        list.serialize(&mut ser)?;

        let tmp = self.temp_path();
        if let Err(err) = fs::write(&tmp, &buf).and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        tracing::debug!(path = %self.path.display(), count = list.len(), "saved tasks");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(TASKS_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
