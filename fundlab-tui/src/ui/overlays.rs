//! Overlay rendering — help popup drawn over the main area.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;
use crate::theme;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Views");
    key(&mut lines, "1-5", "Line / Bar / Box / Heatmap / Statistics");
    key(&mut lines, "Tab / Shift+Tab", "Cycle views forward / back");
    lines.push(Line::from(""));

    section(&mut lines, "Funds");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Space", "Toggle fund under cursor");
    key(&mut lines, "a", "Select all funds");
    key(&mut lines, "d", "Deselect all funds");
    lines.push(Line::from(""));

    section(&mut lines, "Year Range");
    key(&mut lines, "h / l", "Move start year back / forward");
    key(&mut lines, "H / L", "Move end year back / forward");
    key(&mut lines, "0", "Reset funds and years");
    lines.push(Line::from(""));

    section(&mut lines, "Session");
    key(&mut lines, "r", "Regenerate performance data");
    key(&mut lines, "? / Esc", "Close this help");
    key(&mut lines, "q", "Quit");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Help ")
        .title_style(theme::panel_title(true));
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
