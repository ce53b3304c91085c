use crate::app::AppState;
use crate::ui::styles::{border_style, countdown_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer pane. Shows the last published countdown value
/// while a session runs, otherwise a hint for starting one.
pub fn render_countdown_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match app.timer.remaining() {
        Some(remaining) => Line::from(Span::styled(
            format!(" ⏳ Time Left: {}", remaining),
            countdown_style(),
        )),
        None => Line::from(Span::styled(
            " Press 't' to start a focus timer",
            hint_style(),
        )),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Focus Timer ", title_style())),
    );

    f.render_widget(paragraph, area);
}
