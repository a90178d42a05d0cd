//! View 2 — Bar: grouped bars per year, one bar per fund.
//!
//! Ratatui bars carry integer heights, so values are scaled to tenths of a
//! percent; the printed label shows the value to one decimal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

use fundlab_core::views::BarView;

use crate::theme;

const SCALE: f64 = 10.0;

pub fn render(f: &mut Frame, area: Rect, view: &BarView, universe: &[String]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    // Legend line.
    let mut legend: Vec<Span> = Vec::new();
    for fund in &view.funds {
        legend.push(Span::styled(
            "■ ",
            Style::default().fg(theme::fund_color_by_name(universe, fund)),
        ));
        legend.push(Span::styled(format!("{fund}  "), theme::text_secondary()));
    }
    f.render_widget(Paragraph::new(Line::from(legend)), rows[0]);

    let bars_per_group = view.funds.len().max(1) as u16;
    let groups = view.groups.len().max(1) as u16;
    let bar_width = fit_bar_width(rows[1].width, groups, bars_per_group);

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(2)
        .max(scaled(view.max_value));

    for group in &view.groups {
        let bars: Vec<Bar> = group
            .bars
            .iter()
            .map(|b| {
                let color = theme::fund_color_by_name(universe, &b.fund);
                Bar::default()
                    .value(scaled(b.value))
                    .text_value(bar_label(b.value))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(theme::BACKGROUND).bg(color))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(group.year.to_string()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, rows[1]);
}

/// Printed value, one decimal like the heatmap annotations.
pub(crate) fn bar_label(value: f64) -> String {
    format!("{value:.1}")
}

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * SCALE).round() as u64
}

/// Widest bar that still fits every group: `groups * (bars * w) + gaps <= width`.
pub(crate) fn fit_bar_width(width: u16, groups: u16, bars_per_group: u16) -> u16 {
    let gaps = groups.saturating_sub(1) * 2;
    let per_bar = width.saturating_sub(gaps) / (groups * bars_per_group).max(1);
    per_bar.clamp(1, 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bar_width_fits() {
        // 9 groups × 5 bars in 100 columns: (100 - 16) / 45 = 1.
        assert_eq!(fit_bar_width(100, 9, 5), 1);
        // 3 groups × 2 bars in 80 columns: (80 - 4) / 6 = 12, capped at 7.
        assert_eq!(fit_bar_width(80, 3, 2), 7);
        assert_eq!(fit_bar_width(0, 3, 2), 1);
    }

    #[test]
    fn label_keeps_one_decimal() {
        assert_eq!(bar_label(12.34), "12.3");
        assert_eq!(bar_label(5.0), "5.0");
    }

    #[test]
    fn values_scale_to_tenths() {
        assert_eq!(scaled(12.34), 123);
        assert_eq!(scaled(-1.0), 0);
    }

    proptest! {
        #[test]
        fn bar_width_fits_when_room(
            width in 0..400_u16,
            groups in 1..50_u16,
            bars in 1..20_u16,
        ) {
            let w = fit_bar_width(width, groups, bars);
            prop_assert!((1..=7).contains(&w));

            let gaps = u32::from(groups - 1) * 2;
            let cells = u32::from(groups) * u32::from(bars);
            if gaps + cells <= u32::from(width) {
                prop_assert!(gaps + cells * u32::from(w) <= u32::from(width));
            }
        }
    }
}
