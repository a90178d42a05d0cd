//! Box view — one distribution box per fund, years ignored.
//!
//! Whiskers follow the Tukey convention: they reach the most extreme
//! observations within 1.5 × IQR of the box. Anything beyond is an outlier.

use super::View;
use crate::domain::PerformanceTable;
use crate::stats::DescriptiveStats;

const WHISKER_IQR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct FundBox {
    pub fund: String,
    pub stats: DescriptiveStats,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl FundBox {
    fn from_values(fund: &str, values: &[f64]) -> Option<Self> {
        let stats = DescriptiveStats::from_values(values)?;
        let lo_fence = stats.q1 - WHISKER_IQR * stats.iqr();
        let hi_fence = stats.q3 + WHISKER_IQR * stats.iqr();

        let inside = values.iter().copied().filter(|v| (lo_fence..=hi_fence).contains(v));
        let whisker_low = inside.clone().fold(f64::INFINITY, f64::min);
        let whisker_high = inside.fold(f64::NEG_INFINITY, f64::max);

        let mut outliers: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| !(lo_fence..=hi_fence).contains(v))
            .collect();
        outliers.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            fund: fund.to_string(),
            stats,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxView {
    pub boxes: Vec<FundBox>,
    pub min_value: f64,
    pub max_value: f64,
}

pub fn derive(table: &PerformanceTable) -> View<BoxView> {
    let Some((min_value, max_value)) = table.value_range() else {
        return View::NoData;
    };

    let boxes = table
        .present_funds()
        .into_iter()
        .filter_map(|fund| FundBox::from_values(fund, &table.fund_values(fund)))
        .collect();

    View::Ready(BoxView {
        boxes,
        min_value,
        max_value,
    })
}
