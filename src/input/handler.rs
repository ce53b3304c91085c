use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_task_entry_mode(app, key),
        UiMode::EnteringMinutes => handle_minutes_entry_mode(app, key),
        UiMode::ConfirmClear => handle_confirm_clear_mode(app, key),
        UiMode::Notice => handle_notice_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.begin_add_task();
            Ok(false)
        }

        // Mark selected task complete
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.complete_task()?;
            Ok(false)
        }

        // Delete selected task
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_task()?;
            Ok(false)
        }

        // Clear all tasks (asks for confirmation)
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.begin_clear_all();
            Ok(false)
        }

        // Motivational quote
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.inspire_me();
            Ok(false)
        }

        // Start focus timer
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.begin_timer_entry();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing a new task
fn handle_task_entry_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.add_task()?;
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_entry();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.task_input.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.task_input.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while typing the timer minute count
fn handle_minutes_entry_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.start_timer();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_entry();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.minutes_input.pop();
            Ok(false)
        }
        // Validation happens on submit, so typos surface as an input error
        KeyCode::Char(c) => {
            app.minutes_input.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle the clear-all yes/no prompt
fn handle_confirm_clear_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_clear(true)?;
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_clear(false)?;
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Any of the usual dismissal keys closes a notice
fn handle_notice_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.dismiss_notice();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::Speaker;
    use crate::store::TaskStore;
    use crossterm::event::KeyModifiers;

    fn test_app() -> (AppState, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("study_tasks.json");
        let app = AppState::new(TaskStore::default(), path, Speaker::disabled());
        (app, temp_dir)
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _dir) = test_app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let (mut app, _dir) = test_app();
        assert!(press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_add_task_flow() {
        let (mut app, _dir) = test_app();

        assert!(!press(&mut app, KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Read ch.1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.get(0).unwrap().text, "Read ch.1");
    }

    #[test]
    fn test_escape_cancels_task_entry() {
        let (mut app, _dir) = test_app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_backspace_edits_entry() {
        let (mut app, _dir) = test_app();

        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.minutes_input, "1");
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let (mut app, _dir) = test_app();
        app.store.add("one").unwrap();

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.ui_mode, UiMode::ConfirmClear);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 1);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_notice_dismissal() {
        let (mut app, _dir) = test_app();

        // Delete with nothing selected raises a selection error notice
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.ui_mode, UiMode::Notice);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.notice.is_none());
    }
}
