//! View 3 — Box: horizontal box-and-whisker rows, one per fund.
//!
//! Each row shows:
//! - Whiskers at the furthest points within 1.5 × IQR
//! - Box from Q1 to Q3
//! - Median marker
//! - Outliers as dots
//!
//! All rows share one value scale so funds can be compared directly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
    Frame,
};

use fundlab_core::views::{BoxView, FundBox};

use crate::theme;

const LABEL_WIDTH: u16 = 9;

/// Box plot widget over every fund in a [`BoxView`].
pub struct BoxPlotChart<'a> {
    view: &'a BoxView,
    universe: &'a [String],
}

impl<'a> BoxPlotChart<'a> {
    pub fn new(view: &'a BoxView, universe: &'a [String]) -> Self {
        Self { view, universe }
    }
}

pub fn render(f: &mut Frame, area: Rect, view: &BoxView, universe: &[String]) {
    f.render_widget(BoxPlotChart::new(view, universe), area);
}

/// Maps values onto the columns `[left, left + width)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scale {
    min: f64,
    max: f64,
    left: u16,
    width: u16,
}

impl Scale {
    pub(crate) fn new(min: f64, max: f64, left: u16, width: u16) -> Self {
        Self {
            min,
            max,
            left,
            width,
        }
    }

    pub(crate) fn x(&self, v: f64) -> u16 {
        let range = self.max - self.min;
        let span = self.width.saturating_sub(1) as f64;
        if range < 1e-12 {
            return self.left + (span / 2.0).round() as u16;
        }
        let frac = ((v - self.min) / range).clamp(0.0, 1.0);
        self.left + (frac * span).round() as u16
    }
}

impl<'a> Widget for BoxPlotChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.view.boxes.is_empty() || area.width < LABEL_WIDTH + 5 || area.height < 2 {
            return;
        }

        let plot_left = area.x + LABEL_WIDTH;
        let plot_width = area.width - LABEL_WIDTH;
        let scale = Scale::new(self.view.min_value, self.view.max_value, plot_left, plot_width);

        // Last row holds the value axis; rows above are shared by the funds,
        // with a blank spacer between them when there is room.
        let rows_available = area.height - 1;
        let n = self.view.boxes.len() as u16;
        let stride = if rows_available >= n * 2 { 2 } else { 1 };

        for (i, fund_box) in self.view.boxes.iter().enumerate() {
            let y = area.y + i as u16 * stride;
            if y >= area.y + rows_available {
                break;
            }
            let color = theme::fund_color_by_name(self.universe, &fund_box.fund);
            let label: String = fund_box.fund.chars().take(LABEL_WIDTH as usize - 1).collect();
            buf.set_string(area.x, y, label, Style::default().fg(color));
            draw_box_row(buf, y, &scale, fund_box, Style::default().fg(color));
        }

        // Axis row: min / mid / max.
        let axis_y = area.bottom() - 1;
        let muted = theme::muted();
        let mid = (self.view.min_value + self.view.max_value) / 2.0;
        let min_label = format!("{:.1}", self.view.min_value);
        let mid_label = format!("{mid:.1}");
        let max_label = format!("{:.1}", self.view.max_value);

        buf.set_string(plot_left, axis_y, &min_label, muted);
        let mid_x = scale.x(mid).saturating_sub(mid_label.len() as u16 / 2);
        if mid_x > plot_left + min_label.len() as u16
            && mid_x + (mid_label.len() as u16) < area.right().saturating_sub(max_label.len() as u16)
        {
            buf.set_string(mid_x, axis_y, &mid_label, muted);
        }
        let right_x = area.right().saturating_sub(max_label.len() as u16);
        buf.set_string(right_x, axis_y, &max_label, muted);
    }
}

fn draw_box_row(buf: &mut Buffer, y: u16, scale: &Scale, b: &FundBox, box_style: Style) {
    let whisker_style = theme::muted();
    let median_style = theme::warning().add_modifier(Modifier::BOLD);

    let x_lo = scale.x(b.whisker_low);
    let x_q1 = scale.x(b.stats.q1);
    let x_med = scale.x(b.stats.median);
    let x_q3 = scale.x(b.stats.q3);
    let x_hi = scale.x(b.whisker_high);

    // Left whisker
    buf.set_string(x_lo, y, "\u{251C}", whisker_style); // ├
    for x in (x_lo + 1)..x_q1 {
        buf.set_string(x, y, "\u{2500}", whisker_style); // ─
    }

    // Box
    for x in x_q1..=x_q3 {
        buf.set_string(x, y, "\u{2588}", box_style); // █
    }

    // Right whisker
    for x in (x_q3 + 1)..x_hi {
        buf.set_string(x, y, "\u{2500}", whisker_style);
    }
    if x_hi > x_q3 {
        buf.set_string(x_hi, y, "\u{2524}", whisker_style); // ┤
    }

    // Median marker (overwrite)
    buf.set_string(x_med, y, "\u{2503}", median_style); // ┃

    for &o in &b.outliers {
        buf.set_string(scale.x(o), y, "\u{2022}", theme::negative()); // •
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundlab_core::DescriptiveStats;
    use proptest::prelude::*;

    fn fund_box(values: &[f64]) -> FundBox {
        let stats = DescriptiveStats::from_values(values).unwrap();
        FundBox {
            fund: "Fund A".into(),
            stats,
            whisker_low: stats.min,
            whisker_high: stats.max,
            outliers: vec![],
        }
    }

    #[test]
    fn scale_maps_ends_to_edges() {
        let s = Scale::new(5.0, 20.0, 10, 31);
        assert_eq!(s.x(5.0), 10);
        assert_eq!(s.x(20.0), 40);
        assert_eq!(s.x(12.5), 25);
        // Out-of-range values are pinned to the plot.
        assert_eq!(s.x(100.0), 40);
    }

    #[test]
    fn flat_scale_centres() {
        let s = Scale::new(7.0, 7.0, 0, 11);
        assert_eq!(s.x(7.0), 5);
    }

    #[test]
    fn renders_label_box_and_median() {
        let view = BoxView {
            boxes: vec![fund_box(&[5.0, 10.0, 12.0, 15.0, 20.0])],
            min_value: 5.0,
            max_value: 20.0,
        };
        let universe = vec!["Fund A".to_string()];
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        BoxPlotChart::new(&view, &universe).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.starts_with("Fund A"));
        assert!(row.contains('\u{2588}'));
        assert!(row.contains('\u{2503}'));

        let axis: String = (0..area.width)
            .map(|x| buf[(x, 3)].symbol().to_string())
            .collect();
        assert!(axis.contains("5.0"));
        assert!(axis.contains("20.0"));
    }

    #[test]
    fn tiny_area_draws_nothing() {
        let view = BoxView {
            boxes: vec![fund_box(&[1.0, 2.0])],
            min_value: 1.0,
            max_value: 2.0,
        };
        let universe = vec!["Fund A".to_string()];
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        BoxPlotChart::new(&view, &universe).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    proptest! {
        #[test]
        fn scale_stays_inside_plot(
            left in 0..1000_u16,
            width in 1..500_u16,
            min in -100.0..100.0_f64,
            extent in 0.0..100.0_f64,
            v in -1.0e6..1.0e6_f64,
        ) {
            let s = Scale::new(min, min + extent, left, width);
            let x = s.x(v);
            prop_assert!(x >= left && x < left + width);
        }
    }
}
