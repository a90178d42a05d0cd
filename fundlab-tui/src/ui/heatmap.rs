//! View 4 — Heatmap: year rows × fund columns, coloured by performance,
//! each cell annotated with its value.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
    Frame,
};

use fundlab_core::views::HeatmapView;

use crate::theme;

const YEAR_WIDTH: u16 = 6;
const MIN_CELL: u16 = 5;
const MAX_CELL: u16 = 10;

pub struct HeatmapGrid<'a> {
    view: &'a HeatmapView,
}

impl<'a> HeatmapGrid<'a> {
    pub fn new(view: &'a HeatmapView) -> Self {
        Self { view }
    }
}

pub fn render(f: &mut Frame, area: Rect, view: &HeatmapView) {
    f.render_widget(HeatmapGrid::new(view), area);
}

/// Column width that fits `cols` cells after the year column.
pub(crate) fn cell_width(area_width: u16, cols: usize) -> u16 {
    let cols = cols.max(1) as u16;
    (area_width.saturating_sub(YEAR_WIDTH) / cols).clamp(MIN_CELL, MAX_CELL)
}

fn centered(text: &str, width: u16) -> String {
    let w = width as usize;
    let text: String = text.chars().take(w).collect();
    format!("{text:^w$}")
}

impl<'a> Widget for HeatmapGrid<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view;
        if view.funds.is_empty() || area.width <= YEAR_WIDTH || area.height < 2 {
            return;
        }
        let cw = cell_width(area.width, view.funds.len());

        // Header: fund names.
        for (col, fund) in view.funds.iter().enumerate() {
            let x = area.x + YEAR_WIDTH + col as u16 * cw;
            if x + cw > area.right() {
                break;
            }
            buf.set_string(x, area.y, centered(fund, cw), theme::accent_bold());
        }

        // Leave the last row for the colour legend.
        let grid_rows = area.height.saturating_sub(2);
        for (row, year) in view.years.iter().enumerate() {
            if row as u16 >= grid_rows {
                break;
            }
            let y = area.y + 1 + row as u16;
            buf.set_string(area.x, y, format!("{year:<5}"), theme::text_secondary());

            for col in 0..view.funds.len() {
                let x = area.x + YEAR_WIDTH + col as u16 * cw;
                if x + cw > area.right() {
                    break;
                }
                match view.cell(row, col) {
                    Some(v) => {
                        let t = view.normalized(v);
                        let style = Style::default()
                            .bg(theme::heat_color(t))
                            .fg(theme::heat_text_color(t))
                            .add_modifier(Modifier::BOLD);
                        buf.set_string(x, y, centered(&format!("{v:.1}"), cw), style);
                    }
                    None => {
                        buf.set_string(x, y, centered("\u{00B7}", cw), theme::muted()); // ·
                    }
                }
            }
        }

        // Legend: low ▕gradient▏ high.
        let legend_y = area.bottom() - 1;
        let low = format!("{:.1} ", view.min_value);
        let high = format!(" {:.1}", view.max_value);
        let mut x = area.x + YEAR_WIDTH;
        buf.set_string(x, legend_y, &low, theme::muted());
        x += low.len() as u16;
        let steps: u16 = 16;
        if x + steps + high.len() as u16 <= area.right() {
            for i in 0..steps {
                let t = i as f64 / (steps - 1) as f64;
                buf.set_string(x + i, legend_y, " ", Style::default().bg(theme::heat_color(t)));
            }
            buf.set_string(x + steps, legend_y, &high, theme::muted());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HeatmapView {
        HeatmapView {
            years: vec![2018, 2019],
            funds: vec!["Fund A".into(), "Fund B".into()],
            cells: vec![vec![Some(6.0), Some(18.0)], vec![Some(12.0), None]],
            min_value: 6.0,
            max_value: 18.0,
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn cell_width_is_bounded() {
        assert_eq!(cell_width(100, 5), 10);
        assert_eq!(cell_width(36, 5), 6);
        assert_eq!(cell_width(10, 5), 5);
    }

    #[test]
    fn annotates_cells_and_marks_missing() {
        let view = sample();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        HeatmapGrid::new(&view).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Fund A"));
        let first = row_text(&buf, 1);
        assert!(first.starts_with("2018"));
        assert!(first.contains("6.0"));
        assert!(first.contains("18.0"));
        let second = row_text(&buf, 2);
        assert!(second.contains("12.0"));
        assert!(second.contains('\u{00B7}'));
    }

    #[test]
    fn extreme_cells_get_scale_ends() {
        let view = sample();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        HeatmapGrid::new(&view).render(area, &mut buf);

        let low_cell = &buf[(YEAR_WIDTH + 1, 1)];
        assert_eq!(low_cell.bg, theme::heat_color(0.0));
        let cw = cell_width(30, 2);
        let high_cell = &buf[(YEAR_WIDTH + cw + 1, 1)];
        assert_eq!(high_cell.bg, theme::heat_color(1.0));
    }
}
