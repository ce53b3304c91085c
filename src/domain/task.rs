use serde::{Deserialize, Serialize};

/// A single task on the study list
///
/// Identity is positional: a task is addressed by its index in the ordered
/// list, not by a stable ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text (stored trimmed, never empty)
    pub text: String,
    /// Whether the task has been marked complete
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task from raw input.
    /// Returns None if the text is empty after trimming.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
            completed: false,
        })
    }

    /// Status marker shown next to the task text
    pub fn marker(&self) -> &'static str {
        if self.completed {
            "✔"
        } else {
            "✘"
        }
    }

    /// Display line for the list pane: "text [marker]"
    pub fn display_line(&self) -> String {
        format!("{} [{}]", self.text, self.marker())
    }
}
