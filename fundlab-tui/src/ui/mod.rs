//! Top-level UI layout — filter sidebar, tabbed chart area, status bar.

pub mod bar_chart;
pub mod box_plot;
pub mod heatmap;
pub mod line_chart;
pub mod overlays;
pub mod sidebar;
pub mod stats_table;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use fundlab_core::{View, ViewKind};

use crate::app::{AppState, Overlay};
use crate::theme;

const SIDEBAR_WIDTH: u16 = 30;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(main_area);

    sidebar::render(f, columns[0], app);
    draw_view(f, columns[1], app);
    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Help {
        overlays::render_help(f, main_area);
    }
}

/// Draw the tab strip and the active chart with its border.
fn draw_view(f: &mut Frame, area: Rect, app: &AppState) {
    let kind = app.active_view;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", kind.title(), kind.index() + 1))
        .title_style(theme::panel_title(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let titles: Vec<Line> = ViewKind::ALL
        .iter()
        .map(|k| Line::from(format!("{}:{}", k.index() + 1, k.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(kind.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider(Span::styled("|", theme::muted()));
    f.render_widget(tabs, rows[0]);

    let content = rows[1];
    let views = app.dashboard.views();
    let universe = app.funds();
    match kind {
        ViewKind::Line => match &views.line {
            View::Ready(v) => line_chart::render(f, content, v, universe),
            View::NoData => render_no_data(f, content),
        },
        ViewKind::Bar => match &views.bar {
            View::Ready(v) => bar_chart::render(f, content, v, universe),
            View::NoData => render_no_data(f, content),
        },
        ViewKind::Box => match &views.boxplot {
            View::Ready(v) => box_plot::render(f, content, v, universe),
            View::NoData => render_no_data(f, content),
        },
        ViewKind::Heatmap => match &views.heatmap {
            View::Ready(v) => heatmap::render(f, content, v),
            View::NoData => render_no_data(f, content),
        },
        ViewKind::Statistics => match &views.statistics {
            View::Ready(v) => stats_table::render(f, content, v),
            View::NoData => render_no_data(f, content),
        },
    }
}

/// Placeholder shown by every view when the filtered table is empty.
pub fn render_no_data(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("No data", theme::warning())),
        Line::from(""),
        Line::from(Span::styled(
            "Select at least one fund (Space / a) or widen the year range (h / L).",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Axis label positions: `n` evenly spaced values between `lo` and `hi`.
pub(crate) fn axis_ticks(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n < 2 || (hi - lo).abs() < f64::EPSILON {
        return vec![lo];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}
