pub mod countdown_pane;
pub mod entry_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use countdown_pane::render_countdown_pane;
use entry_form::render_entry_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_confirm_clear, render_notice};
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_list_pane(f, app, layout.list_area);
    render_countdown_pane(f, app, layout.countdown_area);

    // Render whichever modal the current mode calls for
    match app.ui_mode {
        UiMode::AddingTask | UiMode::EnteringMinutes => render_entry_form(f, app, size),
        UiMode::ConfirmClear => render_confirm_clear(f, size),
        UiMode::Notice => render_notice(f, app, size),
        UiMode::Normal => {}
    }
}
