use serde::{Deserialize, Serialize};

/// A handle to work that must complete before an artifact is available,
/// named by its task path (e.g. `:lib:jar`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDependency {
    path: String,
}

impl TaskDependency {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Display for TaskDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task '{}'", self.path)
    }
}
