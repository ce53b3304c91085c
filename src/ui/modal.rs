use crate::app::AppState;
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

/// Render the dismissable notice modal (warnings, motivation, timer
/// messages)
pub fn render_notice(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(notice) = &app.notice {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("  {}", notice.message)));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" OK"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        format!(" {} ", notice.title),
                        modal_title_style(),
                    ))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the clear-all confirmation prompt
pub fn render_confirm_clear(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Are you sure you want to clear all tasks?"));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [y]", modal_title_style()),
        Span::raw(" Yes  "),
        Span::styled("[n]", modal_title_style()),
        Span::raw(" No"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Confirm ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
