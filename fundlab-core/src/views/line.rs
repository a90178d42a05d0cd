//! Line view — one year-ordered series per fund.

use super::View;
use crate::domain::PerformanceTable;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub fund: String,
    /// `(year, performance %)`, year ascending.
    pub points: Vec<(i32, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub series: Vec<LineSeries>,
    pub first_year: i32,
    pub last_year: i32,
    pub min_value: f64,
    pub max_value: f64,
}

pub fn derive(table: &PerformanceTable) -> View<LineView> {
    let (Some((first_year, last_year)), Some((min_value, max_value))) =
        (table.year_span(), table.value_range())
    else {
        return View::NoData;
    };

    let series = table
        .present_funds()
        .into_iter()
        .map(|fund| LineSeries {
            fund: fund.to_string(),
            points: table
                .fund_records(fund)
                .into_iter()
                .map(|r| (r.year, r.performance_percent))
                .collect(),
        })
        .collect();

    View::Ready(LineView {
        series,
        first_year,
        last_year,
        min_value,
        max_value,
    })
}
