//! Heatmap view — the filtered table pivoted to a year × fund matrix.
//!
//! Rows are years (ascending), columns are funds (universe order). The table
//! invariant guarantees at most one record per cell, so the pivot never has
//! to aggregate.

use super::View;
use crate::domain::PerformanceTable;

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapView {
    pub years: Vec<i32>,
    pub funds: Vec<String>,
    /// `cells[row][col]`, `None` where the pair has no record.
    pub cells: Vec<Vec<Option<f64>>>,
    pub min_value: f64,
    pub max_value: f64,
}

impl HeatmapView {
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Position of `value` within the colour scale, in `[0, 1]`.
    pub fn normalized(&self, value: f64) -> f64 {
        let range = self.max_value - self.min_value;
        if range < 1e-12 {
            return 0.5;
        }
        ((value - self.min_value) / range).clamp(0.0, 1.0)
    }
}

pub fn derive(table: &PerformanceTable) -> View<HeatmapView> {
    let Some((min_value, max_value)) = table.value_range() else {
        return View::NoData;
    };
    let years = table.distinct_years();
    let funds: Vec<String> = table.present_funds().into_iter().map(String::from).collect();

    let mut cells = vec![vec![None; funds.len()]; years.len()];
    for rec in table.records() {
        let row = years.binary_search(&rec.year);
        let col = funds.iter().position(|f| f == &rec.fund);
        if let (Ok(row), Some(col)) = (row, col) {
            cells[row][col] = Some(rec.performance_percent);
        }
    }

    View::Ready(HeatmapView {
        years,
        funds,
        cells,
        min_value,
        max_value,
    })
}
