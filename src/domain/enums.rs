/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing a new task into the entry form
    AddingTask,
    /// Typing a minute count for the focus timer
    EnteringMinutes,
    /// Yes/no prompt before clearing all tasks
    ConfirmClear,
    /// Dismissable notice (warnings, motivation, timer messages)
    Notice,
}
