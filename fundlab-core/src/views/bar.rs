//! Bar view — grouped bars per year, one bar per fund.

use super::View;
use crate::domain::PerformanceTable;

#[derive(Debug, Clone, PartialEq)]
pub struct FundBar {
    pub fund: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub year: i32,
    /// Funds in universe order; funds without a record that year are skipped.
    pub bars: Vec<FundBar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    pub funds: Vec<String>,
    pub groups: Vec<BarGroup>,
    pub max_value: f64,
}

pub fn derive(table: &PerformanceTable) -> View<BarView> {
    let Some((_, max_value)) = table.value_range() else {
        return View::NoData;
    };
    let funds = table.present_funds();

    let groups = table
        .distinct_years()
        .into_iter()
        .map(|year| BarGroup {
            year,
            bars: funds
                .iter()
                .filter_map(|fund| {
                    table.get(year, fund).map(|r| FundBar {
                        fund: fund.to_string(),
                        value: r.performance_percent,
                    })
                })
                .collect(),
        })
        .collect();

    View::Ready(BarView {
        funds: funds.into_iter().map(String::from).collect(),
        groups,
        max_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::filter::{filter, FundSelection, YearRange};
    use crate::generator::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_group_per_year_one_bar_per_fund() {
        let full = generate(&DashboardConfig::default(), &mut StdRng::seed_from_u64(5));
        let selection = FundSelection::from_names(full.funds(), &["Fund C", "Fund A"]);
        let t = filter(&full, &selection, YearRange::new(2019, 2021).unwrap());

        let view = derive(&t);
        let view = view.as_ready().unwrap();
        assert_eq!(view.funds, vec!["Fund A", "Fund C"]);
        assert_eq!(
            view.groups.iter().map(|g| g.year).collect::<Vec<_>>(),
            vec![2019, 2020, 2021]
        );
        for group in &view.groups {
            assert_eq!(group.bars.len(), 2);
            assert_eq!(group.bars[0].fund, "Fund A");
            assert_eq!(
                group.bars[1].value,
                full.get(group.year, "Fund C").unwrap().performance_percent
            );
            for bar in &group.bars {
                assert!(bar.value <= view.max_value);
            }
        }
    }

    #[test]
    fn empty_table_is_no_data() {
        let full = generate(&DashboardConfig::default(), &mut StdRng::seed_from_u64(5));
        let t = filter(&full, &FundSelection::none(full.funds()), YearRange::full(full.bounds()));
        assert!(derive(&t).is_no_data());
    }
}
