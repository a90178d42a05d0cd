//! Filter stage — fund selection and inclusive year range.
//!
//! Filtering never fails and never mutates its input: it returns a new table
//! holding the records whose fund is selected and whose year falls inside the
//! range. An empty selection or a range that misses every year yields an
//! empty table.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::{PerformanceTable, YearBounds};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("year range start {start} is after end {end}")]
    InvertedRange { start: i32, end: i32 },
}

/// Inclusive `(start, end)` year range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole span of a table's universe.
    pub fn full(bounds: YearBounds) -> Self {
        Self {
            start: bounds.first,
            end: bounds.last.max(bounds.first),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Number of calendar years covered.
    pub fn span(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    /// Clamp both ends into `bounds`. The result is still ordered.
    pub fn clamp_to(self, bounds: YearBounds) -> Self {
        let hi = bounds.last.max(bounds.first);
        let start = self.start.clamp(bounds.first, hi);
        let end = self.end.clamp(bounds.first, hi);
        Self {
            start: start.min(end),
            end,
        }
    }

    /// Move the start by `delta` years, staying within `bounds` and not past `end`.
    pub fn shift_start(self, delta: i32, bounds: YearBounds) -> Self {
        let r = self.clamp_to(bounds);
        let start = r.start.saturating_add(delta).max(bounds.first).min(r.end);
        Self { start, end: r.end }
    }

    /// Move the end by `delta` years, staying within `bounds` and not before `start`.
    pub fn shift_end(self, delta: i32, bounds: YearBounds) -> Self {
        let r = self.clamp_to(bounds);
        let end = r.end.saturating_add(delta).min(bounds.last).max(r.start);
        Self { start: r.start, end }
    }
}

/// The set of funds currently selected, iterated in universe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundSelection {
    universe: Vec<String>,
    selected: HashSet<String>,
}

impl FundSelection {
    /// Every fund selected.
    pub fn all(universe: &[String]) -> Self {
        Self {
            universe: universe.to_vec(),
            selected: universe.iter().cloned().collect(),
        }
    }

    /// Nothing selected.
    pub fn none(universe: &[String]) -> Self {
        Self {
            universe: universe.to_vec(),
            selected: HashSet::new(),
        }
    }

    /// Select exactly `names`. Names outside the universe are ignored.
    pub fn from_names<S: AsRef<str>>(universe: &[String], names: &[S]) -> Self {
        let mut selection = Self::none(universe);
        for name in names {
            selection.select(name.as_ref());
        }
        selection
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn contains(&self, fund: &str) -> bool {
        self.selected.contains(fund)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_all(&self) -> bool {
        self.selected.len() == self.universe.len()
    }

    /// Select `fund`. Returns false if it is not in the universe.
    pub fn select(&mut self, fund: &str) -> bool {
        if !self.universe.iter().any(|f| f == fund) {
            return false;
        }
        self.selected.insert(fund.to_string());
        true
    }

    pub fn deselect(&mut self, fund: &str) {
        self.selected.remove(fund);
    }

    /// Flip `fund`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, fund: &str) -> bool {
        if self.selected.remove(fund) {
            false
        } else {
            self.select(fund)
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.universe.iter().cloned().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected funds in universe order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.universe
            .iter()
            .filter(|f| self.selected.contains(f.as_str()))
            .map(String::as_str)
    }
}

/// Current filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub selection: FundSelection,
    pub years: YearRange,
}

impl FilterCriteria {
    /// Default criteria for a table: every fund over the full year span.
    pub fn for_table(table: &PerformanceTable) -> Self {
        Self {
            selection: FundSelection::all(table.funds()),
            years: YearRange::full(table.bounds()),
        }
    }

    pub fn apply(&self, table: &PerformanceTable) -> PerformanceTable {
        filter(table, &self.selection, self.years)
    }
}

/// Records whose fund is selected and whose year lies in `years`.
pub fn filter(
    table: &PerformanceTable,
    selection: &FundSelection,
    years: YearRange,
) -> PerformanceTable {
    let records: Vec<_> = table
        .records()
        .iter()
        .filter(|r| selection.contains(&r.fund) && years.contains(r.year))
        .cloned()
        .collect();

    tracing::trace!(
        selected = selection.len(),
        start = years.start(),
        end = years.end(),
        kept = records.len(),
        of = table.len(),
        "filtered table"
    );

    PerformanceTable::from_trusted(table.funds().to_vec(), table.bounds(), records)
}
