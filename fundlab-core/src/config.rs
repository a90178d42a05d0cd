//! Dashboard configuration — year span, fund universe, and simulation bounds.
//!
//! Stored as TOML. Every field has a default, so an empty file (or no file at
//! all) yields the stock 2015–2023 × five-fund dashboard.
//!
//! ```toml
//! start_year = 2015
//! end_year = 2023
//! funds = ["Fund A", "Fund B", "Fund C", "Fund D", "Fund E"]
//! seed = 42
//!
//! [performance]
//! low = 5.0
//! high = 20.0
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::YearBounds;

/// Shortest year span that still gives a meaningful multi-year comparison.
pub const MIN_YEARS: usize = 5;

/// Longest year span a session will generate.
pub const MAX_YEARS: usize = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("year span {start}..={end} covers {years} years, need at least {min}", min = MIN_YEARS)]
    TooFewYears { start: i32, end: i32, years: i64 },

    #[error("year span {start}..={end} covers {years} years, at most {max} allowed", max = MAX_YEARS)]
    TooManyYears { start: i32, end: i32, years: i64 },

    #[error("fund list is empty")]
    NoFunds,

    #[error("fund {0:?} listed more than once")]
    DuplicateFund(String),

    #[error("fund names must not be blank")]
    BlankFund,

    #[error("performance bounds must be finite with low < high (got [{low}, {high}))")]
    InvalidBounds { low: f64, high: f64 },
}

/// Half-open interval `[low, high)` that simulated performance is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerformanceBounds {
    pub low: f64,
    pub high: f64,
}

impl Default for PerformanceBounds {
    fn default() -> Self {
        Self {
            low: 5.0,
            high: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub start_year: i32,
    pub end_year: i32,
    pub funds: Vec<String>,
    pub performance: PerformanceBounds,
    /// Fixed RNG seed. `None` draws from OS entropy on every run.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            start_year: 2015,
            end_year: 2023,
            funds: ["Fund A", "Fund B", "Fund C", "Fund D", "Fund E"]
                .into_iter()
                .map(String::from)
                .collect(),
            performance: PerformanceBounds::default(),
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let years = i64::from(self.end_year) - i64::from(self.start_year) + 1;
        if years < MIN_YEARS as i64 {
            return Err(ConfigError::TooFewYears {
                start: self.start_year,
                end: self.end_year,
                years,
            });
        }
        if years > MAX_YEARS as i64 {
            return Err(ConfigError::TooManyYears {
                start: self.start_year,
                end: self.end_year,
                years,
            });
        }

        if self.funds.is_empty() {
            return Err(ConfigError::NoFunds);
        }
        let mut seen = HashSet::new();
        for fund in &self.funds {
            if fund.trim().is_empty() {
                return Err(ConfigError::BlankFund);
            }
            if !seen.insert(fund.as_str()) {
                return Err(ConfigError::DuplicateFund(fund.clone()));
            }
        }

        let PerformanceBounds { low, high } = self.performance;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ConfigError::InvalidBounds { low, high });
        }
        Ok(())
    }

    pub fn year_bounds(&self) -> YearBounds {
        YearBounds {
            first: self.start_year,
            last: self.end_year,
        }
    }
}
