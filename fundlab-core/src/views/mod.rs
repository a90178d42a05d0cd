//! Presentation-stage derivations.
//!
//! Each view is recomputed from the filtered table on every filter change.
//! A derivation over an empty table yields [`View::NoData`]; renderers draw a
//! placeholder for it instead of an empty chart.

pub mod bar;
pub mod boxplot;
pub mod heatmap;
pub mod line;
pub mod statistics;

pub use bar::{BarGroup, BarView, FundBar};
pub use boxplot::{BoxView, FundBox};
pub use heatmap::HeatmapView;
pub use line::{LineSeries, LineView};
pub use statistics::{FundStatistics, StatisticsView};

use crate::domain::PerformanceTable;
use crate::filter::FundSelection;

/// A derived view, or the explicit absence of data to show.
#[derive(Debug, Clone, PartialEq)]
pub enum View<T> {
    Ready(T),
    NoData,
}

impl<T> View<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, View::NoData)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            View::Ready(v) => Some(v),
            View::NoData => None,
        }
    }
}

/// The five chart kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Line,
    Bar,
    Box,
    Heatmap,
    Statistics,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Line,
        ViewKind::Bar,
        ViewKind::Box,
        ViewKind::Heatmap,
        ViewKind::Statistics,
    ];

    pub fn index(self) -> usize {
        match self {
            ViewKind::Line => 0,
            ViewKind::Bar => 1,
            ViewKind::Box => 2,
            ViewKind::Heatmap => 3,
            ViewKind::Statistics => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Line => "Performance Over Years (Line)",
            ViewKind::Bar => "Performance Over Years (Bar)",
            ViewKind::Box => "Performance Distribution (Box)",
            ViewKind::Heatmap => "Heatmap of Performance",
            ViewKind::Statistics => "Statistical Summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Line => "Line",
            ViewKind::Bar => "Bar",
            ViewKind::Box => "Box",
            ViewKind::Heatmap => "Heatmap",
            ViewKind::Statistics => "Stats",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// All five views derived from one filtered table.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSet {
    pub line: View<LineView>,
    pub bar: View<BarView>,
    pub boxplot: View<BoxView>,
    pub heatmap: View<HeatmapView>,
    pub statistics: View<StatisticsView>,
}

impl ViewSet {
    pub fn derive(filtered: &PerformanceTable, selection: &FundSelection) -> Self {
        Self {
            line: line::derive(filtered),
            bar: bar::derive(filtered),
            boxplot: boxplot::derive(filtered),
            heatmap: heatmap::derive(filtered),
            statistics: statistics::derive(filtered, selection),
        }
    }

    /// True when every view has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.line.is_no_data()
            && self.bar.is_no_data()
            && self.boxplot.is_no_data()
            && self.heatmap.is_no_data()
            && self.statistics.is_no_data()
    }
}
