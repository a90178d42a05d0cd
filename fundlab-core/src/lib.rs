//! FundLab Core — synthetic fund performance data and dashboard derivations.
//!
//! The pipeline is linear:
//! - Generator: dense `{funds} × {years}` table with uniform random performance
//! - Filter: fund selection plus inclusive year range
//! - Views: line series, grouped bars, box plots, year × fund heatmap,
//!   per-fund descriptive statistics
//!
//! [`Dashboard`] holds the session state and re-runs filter + derivation on
//! every input change.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod filter;
pub mod generator;
pub mod stats;
pub mod views;

pub use config::{ConfigError, DashboardConfig, PerformanceBounds};
pub use dashboard::Dashboard;
pub use domain::{PerformanceRecord, PerformanceTable, TableError, YearBounds};
pub use filter::{filter, FilterCriteria, FilterError, FundSelection, YearRange};
pub use generator::{generate, SeedSource};
pub use stats::DescriptiveStats;
pub use views::{View, ViewKind, ViewSet};
