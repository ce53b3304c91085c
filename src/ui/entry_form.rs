use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the single-field entry form (task text or timer minutes)
pub fn render_entry_form(f: &mut Frame, app: &AppState, area: Rect) {
    let (title, label, value) = match app.ui_mode {
        UiMode::AddingTask => (" Add Task ", "Task:", app.task_input.as_str()),
        UiMode::EnteringMinutes => (" Focus Timer ", "Timer (min):", app.minutes_input.as_str()),
        _ => return,
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw(label));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        Span::styled("█", modal_title_style()), // Cursor
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::raw("Enter to submit  ·  Esc to cancel"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
