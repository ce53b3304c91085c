use thiserror::Error;

/// Recoverable user-facing errors. Every variant leaves state unchanged
/// and is surfaced as a modal notice the user can dismiss and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Please enter a task.")]
    EmptyTask,

    #[error("Please select a task first.")]
    NoSelection,

    #[error("Please enter a valid number of minutes.")]
    InvalidMinutes,

    #[error("A focus timer is already running.")]
    TimerActive,
}

impl ActionError {
    /// Modal title for this error
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyTask | Self::InvalidMinutes => "Input Error",
            Self::NoSelection => "Selection Error",
            Self::TimerActive => "Timer Busy",
        }
    }
}
