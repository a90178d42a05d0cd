//! Sidebar — fund multi-select and year-range slider.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use fundlab_core::{YearBounds, YearRange};

use crate::app::AppState;
use crate::theme;

const SLIDER_WIDTH: usize = 18;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Filters ")
        .title_style(theme::panel_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let criteria = app.dashboard.criteria();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Select Funds to Compare", theme::accent_bold())));
    for (i, fund) in app.funds().iter().enumerate() {
        let checked = criteria.selection.contains(fund);
        let is_cursor = i == app.fund_cursor;
        let mark = if checked { "[x]" } else { "[ ]" };

        let mut name_style = Style::default().fg(theme::fund_color(i));
        if !checked {
            name_style = theme::muted();
        }
        if is_cursor {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }

        lines.push(Line::from(vec![
            Span::styled(if is_cursor { "> " } else { "  " }, theme::accent()),
            Span::styled(
                format!("{mark} "),
                if checked { theme::positive() } else { theme::muted() },
            ),
            Span::styled(fund.clone(), name_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}/{} selected", criteria.selection.len(), app.funds().len()),
        theme::text_secondary(),
    )));
    lines.push(Line::from(""));

    let bounds = app.dashboard.table().bounds();
    lines.push(Line::from(Span::styled("Select Year Range", theme::accent_bold())));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(range_slider(criteria.years, bounds, SLIDER_WIDTH), theme::accent()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<8}", bounds.first), theme::muted()),
        Span::styled(
            format!("{:>width$}", bounds.last, width = SLIDER_WIDTH - 6),
            theme::muted(),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Years: ", theme::text_secondary()),
        Span::styled(
            format!("{}–{}", criteria.years.start(), criteria.years.end()),
            theme::warning().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "[j/k] move [Space] toggle",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled("[h/l] start [H/L] end", theme::muted())));
    lines.push(Line::from(Span::styled("[?] help [q] quit", theme::muted())));

    f.render_widget(Paragraph::new(lines), inner);
}

/// Two-handle slider: `[---|=====|----]` with the selected span filled.
pub(crate) fn range_slider(range: YearRange, bounds: YearBounds, width: usize) -> String {
    let span = (bounds.last - bounds.first) as f64;
    if span <= 0.0 || width < 2 {
        return format!("[{}]", "=".repeat(width));
    }
    let pos = |year: i32| -> usize {
        let frac = ((year - bounds.first) as f64 / span).clamp(0.0, 1.0);
        (frac * (width - 1) as f64).round() as usize
    };
    let lo = pos(range.start());
    let hi = pos(range.end());

    let body: String = (0..width)
        .map(|i| {
            if i == lo || i == hi {
                '|'
            } else if i > lo && i < hi {
                '='
            } else {
                '-'
            }
        })
        .collect();
    format!("[{body}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> YearBounds {
        YearBounds {
            first: 2015,
            last: 2023,
        }
    }

    #[test]
    fn full_range_slider() {
        let s = range_slider(YearRange::full(bounds()), bounds(), 9);
        assert_eq!(s, "[|=======|]");
    }

    #[test]
    fn partial_range_slider() {
        let s = range_slider(YearRange::new(2017, 2019).unwrap(), bounds(), 9);
        assert_eq!(s, "[--|=|----]");
    }

    #[test]
    fn single_year_slider() {
        let s = range_slider(YearRange::new(2015, 2015).unwrap(), bounds(), 5);
        assert_eq!(s, "[|----]");
    }

    proptest! {
        #[test]
        fn slider_keeps_its_width(
            first in 1900..2100_i32,
            span in 1..200_i32,
            a in 0..200_i32,
            b in 0..200_i32,
            width in 2..40_usize,
        ) {
            let bounds = YearBounds { first, last: first + span };
            let (lo, hi) = (a.min(b).min(span), a.max(b).min(span));
            let range = YearRange::new(first + lo, first + hi).unwrap();
            let s = range_slider(range, bounds, width);

            prop_assert_eq!(s.chars().count(), width + 2);
            prop_assert!(s.starts_with('[') && s.ends_with(']'));
            prop_assert!(s.contains('|'));
        }
    }
}
