//! Bottom status bar — view hints, record count, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    // View hints
    spans.push(Span::styled(
        " 1:Line 2:Bar 3:Box 4:Heatmap 5:Stats ?:Help",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));

    let shown = app.dashboard.filtered().len();
    let total = app.dashboard.table().len();
    let count_style = if shown == 0 {
        theme::warning()
    } else {
        theme::text()
    };
    spans.push(Span::styled(
        format!("{shown}/{total} records"),
        count_style,
    ));

    // Status message
    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
