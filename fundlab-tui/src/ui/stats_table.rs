//! View 5 — Statistics: per-fund descriptive summary table.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use fundlab_core::views::{FundStatistics, StatisticsView};

use crate::theme;

const COLUMNS: [&str; 9] = ["Fund", "count", "mean", "std", "min", "25%", "50%", "75%", "max"];

pub fn render(f: &mut Frame, area: Rect, view: &StatisticsView) {
    let header_cells: Vec<Cell> = COLUMNS
        .iter()
        .map(|h| Cell::from(Span::styled(*h, theme::accent_bold())))
        .collect();
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let cells: Vec<Cell> = row_cells(row)
                .into_iter()
                .enumerate()
                .map(|(i, text)| {
                    let style = if i == 0 {
                        theme::text()
                    } else if row.summary.is_none() {
                        theme::warning()
                    } else {
                        theme::text_secondary()
                    };
                    Cell::from(Span::styled(text, style))
                })
                .collect();
            Row::new(cells).height(1)
        })
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(std::iter::repeat(Constraint::Length(8)).take(COLUMNS.len() - 1));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .style(Style::default().fg(theme::TEXT_PRIMARY));
    f.render_widget(table, area);
}

/// Display text for one table row. A fund with no filtered records reads
/// "no data"; a missing standard deviation reads "—".
pub(crate) fn row_cells(row: &FundStatistics) -> Vec<String> {
    let Some(s) = &row.summary else {
        let mut cells = vec![row.fund.clone(), "0".to_string(), "no data".to_string()];
        cells.resize(COLUMNS.len(), String::new());
        return cells;
    };
    vec![
        row.fund.clone(),
        s.count.to_string(),
        format!("{:.2}", s.mean),
        s.std.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.2}")),
        format!("{:.2}", s.min),
        format!("{:.2}", s.q1),
        format!("{:.2}", s.median),
        format!("{:.2}", s.q3),
        format!("{:.2}", s.max),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundlab_core::DescriptiveStats;

    #[test]
    fn formats_full_summary() {
        let row = FundStatistics {
            fund: "Fund A".into(),
            summary: DescriptiveStats::from_values(&[10.0, 12.0, 14.0]),
        };
        assert_eq!(
            row_cells(&row),
            vec!["Fund A", "3", "12.00", "2.00", "10.00", "11.00", "12.00", "13.00", "14.00"]
        );
    }

    #[test]
    fn single_observation_has_no_std() {
        let row = FundStatistics {
            fund: "Fund B".into(),
            summary: DescriptiveStats::from_values(&[7.5]),
        };
        assert_eq!(row_cells(&row)[3], "\u{2014}");
    }

    #[test]
    fn empty_fund_reads_no_data() {
        let row = FundStatistics {
            fund: "Fund C".into(),
            summary: None,
        };
        let cells = row_cells(&row);
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[2], "no data");
    }
}
