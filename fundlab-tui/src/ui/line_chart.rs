//! View 1 — Line: one connected series per fund, x = year, y = performance.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition};
use ratatui::Frame;

use fundlab_core::views::LineView;

use super::axis_ticks;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, view: &LineView, universe: &[String]) {
    let padding = ((view.max_value - view.min_value).abs() * 0.05).max(0.5);
    let y_min = view.min_value - padding;
    let y_max = view.max_value + padding;
    // A single year still needs a non-degenerate x range.
    let x_min = view.first_year as f64 - 0.5;
    let x_max = view.last_year as f64 + 0.5;

    let data: Vec<Vec<(f64, f64)>> = view
        .series
        .iter()
        .map(|s| s.points.iter().map(|&(y, v)| (y as f64, v)).collect())
        .collect();

    let mut datasets = Vec::with_capacity(view.series.len() * 2);
    for (series, points) in view.series.iter().zip(&data) {
        let color = theme::fund_color_by_name(universe, &series.fund);
        datasets.push(
            Dataset::default()
                .name(series.fund.clone())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(color))
                .graph_type(GraphType::Line)
                .data(points),
        );
        // Point markers, unnamed so the legend lists each fund once.
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .style(Style::default().fg(color))
                .graph_type(GraphType::Scatter)
                .data(points),
        );
    }

    let x_labels: Vec<Span> = year_labels(view.first_year, view.last_year)
        .into_iter()
        .map(|y| Span::styled(y.to_string(), theme::muted()))
        .collect();
    let y_labels: Vec<Span> = axis_ticks(y_min, y_max, 3)
        .into_iter()
        .map(|v| Span::styled(format!("{v:.1}"), theme::muted()))
        .collect();

    let chart = Chart::new(datasets)
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .title(Span::styled("Year", theme::muted()))
                .style(theme::muted())
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Performance (%)", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// First, middle and last year, without duplicates.
pub(crate) fn year_labels(first: i32, last: i32) -> Vec<i32> {
    let mut out = vec![first, first + (last - first) / 2, last];
    out.dedup();
    out
}
