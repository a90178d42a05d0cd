//! Statistics view — descriptive statistics per selected fund.

use super::View;
use crate::domain::PerformanceTable;
use crate::filter::FundSelection;
use crate::stats::DescriptiveStats;

#[derive(Debug, Clone, PartialEq)]
pub struct FundStatistics {
    pub fund: String,
    /// `None` when the fund is selected but has no records in range.
    pub summary: Option<DescriptiveStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsView {
    pub rows: Vec<FundStatistics>,
}

impl StatisticsView {
    pub fn get(&self, fund: &str) -> Option<&FundStatistics> {
        self.rows.iter().find(|r| r.fund == fund)
    }
}

pub fn derive(table: &PerformanceTable, selection: &FundSelection) -> View<StatisticsView> {
    if table.is_empty() {
        return View::NoData;
    }

    let rows = selection
        .iter()
        .map(|fund| FundStatistics {
            fund: fund.to_string(),
            summary: DescriptiveStats::from_values(&table.fund_values(fund)),
        })
        .collect();

    View::Ready(StatisticsView { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PerformanceRecord, YearBounds};

    fn universe() -> Vec<String> {
        vec!["Fund A".into(), "Fund B".into(), "Fund C".into()]
    }

    fn table(records: Vec<PerformanceRecord>) -> PerformanceTable {
        PerformanceTable::from_records(
            universe(),
            YearBounds {
                first: 2015,
                last: 2023,
            },
            records,
        )
        .unwrap()
    }

    #[test]
    fn count_and_mean_per_fund() {
        let t = table(vec![
            PerformanceRecord::new(2015, "Fund A", 5.0),
            PerformanceRecord::new(2016, "Fund A", 7.0),
            PerformanceRecord::new(2017, "Fund A", 12.0),
            PerformanceRecord::new(2015, "Fund B", 9.0),
        ]);
        let view = derive(&t, &FundSelection::from_names(&universe(), &["Fund A", "Fund B"]));
        let view = view.as_ready().unwrap();

        let a = view.get("Fund A").unwrap().summary.unwrap();
        assert_eq!(a.count, 3);
        assert!((a.mean - 8.0).abs() < 1e-12);

        let b = view.get("Fund B").unwrap().summary.unwrap();
        assert_eq!(b.count, 1);
        assert_eq!(b.std, None);
    }

    #[test]
    fn selected_fund_without_rows_reports_no_data() {
        let t = table(vec![PerformanceRecord::new(2015, "Fund A", 5.0)]);
        let view = derive(&t, &FundSelection::all(&universe()));
        let view = view.as_ready().unwrap();
        assert_eq!(view.rows.len(), 3);
        assert!(view.get("Fund A").unwrap().summary.is_some());
        assert!(view.get("Fund C").unwrap().summary.is_none());
    }

    #[test]
    fn empty_table_is_no_data() {
        assert!(derive(&table(vec![]), &FundSelection::all(&universe())).is_no_data());
    }
}
