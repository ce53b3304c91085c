use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .display_lines()
        .enumerate()
        .map(|(idx, line)| {
            let style = if Some(idx) == app.selected() {
                selected_style()
            } else if app.store.get(idx).map(|t| t.completed).unwrap_or(false) {
                done_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" 📚 Study Tasks ({}) ", app.store.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
