use crate::domain::UiMode;
use crate::error::ActionError;
use crate::notifications;
use crate::persistence::save_snapshot;
use crate::quotes;
use crate::speech::Speaker;
use crate::store::TaskStore;
use crate::timer::FocusTimer;
use anyhow::Result;
use std::path::PathBuf;

/// Dismissable notice modal (warnings, motivation, timer messages)
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Main application state
pub struct AppState {
    /// The task store, owned here and handed to the UI by reference
    pub store: TaskStore,
    snapshot_path: PathBuf,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    /// Text being typed in the add-task form
    pub task_input: String,
    /// Text being typed in the timer minutes form
    pub minutes_input: String,
    pub notice: Option<Notice>,
    pub timer: FocusTimer,
    speaker: Speaker,
}

impl AppState {
    pub fn new(store: TaskStore, snapshot_path: PathBuf, speaker: Speaker) -> Self {
        let timer = FocusTimer::new(speaker.clone());
        Self {
            store,
            snapshot_path,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            task_input: String::new(),
            minutes_input: String::new(),
            notice: None,
            timer,
            speaker,
        }
    }

    /// Startup greeting
    pub fn greet(&self) {
        self.speaker
            .say("Hello! I'm your virtual study buddy. Ready to study?");
    }

    /// Persist the full task list to the snapshot file
    pub fn save(&self) -> Result<()> {
        save_snapshot(&self.snapshot_path, self.store.tasks())
    }

    /// Index of the currently selected task, if any task exists
    pub fn selected(&self) -> Option<usize> {
        if self.store.is_empty() {
            None
        } else {
            Some(self.selected_index.min(self.store.len() - 1))
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Clamp selection after a removal
    fn clamp_selection(&mut self) {
        if self.selected_index >= self.store.len() {
            self.selected_index = self.store.len().saturating_sub(1);
        }
    }

    // --- Entry forms ---

    pub fn begin_add_task(&mut self) {
        self.task_input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn begin_timer_entry(&mut self) {
        self.minutes_input.clear();
        self.ui_mode = UiMode::EnteringMinutes;
    }

    pub fn begin_clear_all(&mut self) {
        self.ui_mode = UiMode::ConfirmClear;
    }

    pub fn cancel_entry(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // --- Controller operations ---

    /// Submit the add-task form. Blank input is a warning; otherwise the
    /// task is appended, the snapshot written, and a confirmation spoken.
    pub fn add_task(&mut self) -> Result<()> {
        match self.store.add(&self.task_input) {
            Ok(()) => {
                self.task_input.clear();
                self.ui_mode = UiMode::Normal;
                self.save()?;
                self.speaker.say("Task added");
            }
            Err(err) => self.show_error(err),
        }
        Ok(())
    }

    /// Delete the selected task
    pub fn delete_task(&mut self) -> Result<()> {
        let Some(index) = self.selected() else {
            self.show_error(ActionError::NoSelection);
            return Ok(());
        };
        self.store.remove(index)?;
        self.clamp_selection();
        self.save()?;
        self.speaker.say("Task deleted");
        Ok(())
    }

    /// Mark the selected task complete. Completing an already-completed
    /// task is a state no-op but still persists and speaks.
    pub fn complete_task(&mut self) -> Result<()> {
        let Some(index) = self.selected() else {
            self.show_error(ActionError::NoSelection);
            return Ok(());
        };
        self.store.complete(index)?;
        self.save()?;
        self.speaker.say("Task marked as complete");
        Ok(())
    }

    /// Resolve the clear-all confirmation prompt
    pub fn confirm_clear(&mut self, confirmed: bool) -> Result<()> {
        self.ui_mode = UiMode::Normal;
        if !confirmed {
            return Ok(());
        }
        self.store.clear();
        self.selected_index = 0;
        self.save()?;
        self.speaker.say("All tasks cleared");
        Ok(())
    }

    /// Pick a motivational quote, speak it, and show it in a notice
    pub fn inspire_me(&mut self) {
        let quote = quotes::pick(&mut rand::thread_rng());
        self.speaker.say(quote);
        self.show_notice("Motivation", quote);
    }

    /// Submit the timer minutes form
    pub fn start_timer(&mut self) {
        match self.timer.start(&self.minutes_input) {
            Ok(minutes) => {
                self.minutes_input.clear();
                notifications::notify_timer_started(minutes);
                self.show_notice(
                    "Timer",
                    &format!("Focus mode for {} minutes started!", minutes),
                );
            }
            Err(err) => self.show_error(err),
        }
    }

    /// Called every UI tick: surface the completion notice once the ticker
    /// finishes
    pub fn poll_timer(&mut self) {
        if self.timer.take_finished() {
            notifications::notify_timer_done();
            self.show_notice("Time's Up", "Time's up! Great work!");
        }
    }

    // --- Notices ---

    pub fn show_notice(&mut self, title: &str, message: &str) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message: message.to_string(),
        });
        self.ui_mode = UiMode::Notice;
    }

    pub fn show_error(&mut self, err: ActionError) {
        self.show_notice(err.title(), &err.to_string());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Normal;
    }
}
