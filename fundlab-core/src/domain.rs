//! Domain types — performance records and the dense performance table.
//!
//! A `PerformanceTable` is never mutated after construction. The filter stage
//! builds a new table from a subset of records; the generator builds the full
//! one. Every constructor upholds the same invariant: at most one record per
//! `(year, fund)` key, funds drawn from the table's universe, years within its
//! bounds.

use std::collections::HashSet;

use thiserror::Error;

/// One `(year, fund, performance %)` data point.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRecord {
    pub year: i32,
    pub fund: String,
    pub performance_percent: f64,
}

impl PerformanceRecord {
    pub fn new(year: i32, fund: impl Into<String>, performance_percent: f64) -> Self {
        Self {
            year,
            fund: fund.into(),
            performance_percent,
        }
    }
}

/// Inclusive year bounds of a table's universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub first: i32,
    pub last: i32,
}

impl YearBounds {
    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    pub fn len(&self) -> usize {
        (i64::from(self.last) - i64::from(self.first) + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.first..=self.last
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("duplicate record for ({year}, {fund})")]
    DuplicateKey { year: i32, fund: String },

    #[error("fund {0:?} is not part of the fund universe")]
    UnknownFund(String),

    #[error("year {year} outside {first}..={last}")]
    YearOutOfBounds { year: i32, first: i32, last: i32 },
}

/// A table of performance records over a fixed fund universe and year span.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceTable {
    funds: Vec<String>,
    bounds: YearBounds,
    records: Vec<PerformanceRecord>,
}

impl PerformanceTable {
    /// Build a table, validating every record against the universe.
    pub fn from_records(
        funds: Vec<String>,
        bounds: YearBounds,
        records: Vec<PerformanceRecord>,
    ) -> Result<Self, TableError> {
        Self::validate(&funds, bounds, &records)?;
        Ok(Self {
            funds,
            bounds,
            records,
        })
    }

    fn validate(
        funds: &[String],
        bounds: YearBounds,
        records: &[PerformanceRecord],
    ) -> Result<(), TableError> {
        let mut seen: HashSet<(i32, &str)> = HashSet::with_capacity(records.len());
        for rec in records {
            if !funds.iter().any(|f| f == &rec.fund) {
                return Err(TableError::UnknownFund(rec.fund.clone()));
            }
            if !bounds.contains(rec.year) {
                return Err(TableError::YearOutOfBounds {
                    year: rec.year,
                    first: bounds.first,
                    last: bounds.last,
                });
            }
            if !seen.insert((rec.year, rec.fund.as_str())) {
                return Err(TableError::DuplicateKey {
                    year: rec.year,
                    fund: rec.fund.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build a table from records already known to satisfy the invariant,
    /// e.g. a subset of another valid table's records.
    pub(crate) fn from_trusted(
        funds: Vec<String>,
        bounds: YearBounds,
        records: Vec<PerformanceRecord>,
    ) -> Self {
        debug_assert!(
            Self::validate(&funds, bounds, &records).is_ok(),
            "trusted records violate the table invariant"
        );
        Self {
            funds,
            bounds,
            records,
        }
    }

    /// The fund universe, in display order.
    pub fn funds(&self) -> &[String] {
        &self.funds
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lowest and highest year actually present, if any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Distinct years present, ascending.
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Funds with at least one record, in universe order.
    pub fn present_funds(&self) -> Vec<&str> {
        self.funds
            .iter()
            .filter(|f| self.records.iter().any(|r| &r.fund == *f))
            .map(String::as_str)
            .collect()
    }

    /// Records for one fund, ordered by year ascending.
    pub fn fund_records(&self, fund: &str) -> Vec<&PerformanceRecord> {
        let mut out: Vec<&PerformanceRecord> =
            self.records.iter().filter(|r| r.fund == fund).collect();
        out.sort_by_key(|r| r.year);
        out
    }

    /// Performance values for one fund, ordered by year ascending.
    pub fn fund_values(&self, fund: &str) -> Vec<f64> {
        self.fund_records(fund)
            .into_iter()
            .map(|r| r.performance_percent)
            .collect()
    }

    /// Look up the single record for a `(year, fund)` key.
    pub fn get(&self, year: i32, fund: &str) -> Option<&PerformanceRecord> {
        self.records
            .iter()
            .find(|r| r.year == year && r.fund == fund)
    }

    /// Minimum and maximum performance across all records.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            return None;
        }
        let min = self
            .records
            .iter()
            .map(|r| r.performance_percent)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .records
            .iter()
            .map(|r| r.performance_percent)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funds() -> Vec<String> {
        vec!["Fund A".into(), "Fund B".into()]
    }

    fn bounds() -> YearBounds {
        YearBounds {
            first: 2020,
            last: 2022,
        }
    }

    #[test]
    fn from_records_accepts_unique_keys() {
        let table = PerformanceTable::from_records(
            funds(),
            bounds(),
            vec![
                PerformanceRecord::new(2020, "Fund A", 7.0),
                PerformanceRecord::new(2020, "Fund B", 8.0),
                PerformanceRecord::new(2021, "Fund A", 9.0),
            ],
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2021, "Fund A").unwrap().performance_percent, 9.0);
        assert!(table.get(2021, "Fund B").is_none());
    }

    #[test]
    fn from_records_rejects_duplicate_key() {
        let err = PerformanceTable::from_records(
            funds(),
            bounds(),
            vec![
                PerformanceRecord::new(2020, "Fund A", 7.0),
                PerformanceRecord::new(2020, "Fund A", 8.0),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateKey {
                year: 2020,
                fund: "Fund A".into()
            }
        );
    }

    #[test]
    fn from_records_rejects_unknown_fund() {
        let err = PerformanceTable::from_records(
            funds(),
            bounds(),
            vec![PerformanceRecord::new(2020, "Fund Z", 7.0)],
        )
        .unwrap_err();
        assert_eq!(err, TableError::UnknownFund("Fund Z".into()));
    }

    #[test]
    fn from_records_rejects_year_out_of_bounds() {
        let err = PerformanceTable::from_records(
            funds(),
            bounds(),
            vec![PerformanceRecord::new(2019, "Fund A", 7.0)],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::YearOutOfBounds { year: 2019, .. }));
    }

    #[test]
    fn fund_records_are_year_ordered() {
        let table = PerformanceTable::from_records(
            funds(),
            bounds(),
            vec![
                PerformanceRecord::new(2022, "Fund A", 3.0),
                PerformanceRecord::new(2020, "Fund A", 1.0),
                PerformanceRecord::new(2021, "Fund A", 2.0),
            ],
        )
        .unwrap();
        assert_eq!(table.fund_values("Fund A"), vec![1.0, 2.0, 3.0]);
        assert_eq!(table.distinct_years(), vec![2020, 2021, 2022]);
        assert_eq!(table.present_funds(), vec!["Fund A"]);
        assert_eq!(table.value_range(), Some((1.0, 3.0)));
    }

    #[test]
    fn empty_table_has_no_span() {
        let table = PerformanceTable::from_records(funds(), bounds(), vec![]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.year_span(), None);
        assert_eq!(table.value_range(), None);
    }

    #[test]
    fn year_bounds_len() {
        assert_eq!(bounds().len(), 3);
        let extreme = YearBounds {
            first: i32::MIN,
            last: i32::MAX,
        };
        assert_eq!(extreme.len(), 1 << 32);
        let inverted = YearBounds {
            first: 2020,
            last: 2010,
        };
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
        assert_eq!(bounds().years().collect::<Vec<_>>(), vec![2020, 2021, 2022]);
    }
}
