//! Dashboard state-holder.
//!
//! Owns the full table, the filter inputs, and the views derived from them.
//! Every input change goes through a method here, and every such method ends
//! in [`Dashboard::refresh`], which re-filters the full table and re-derives
//! all five views. Nothing is cached between refreshes.

use crate::config::{ConfigError, DashboardConfig};
use crate::domain::PerformanceTable;
use crate::filter::{FilterCriteria, FilterError, YearRange};
use crate::generator::{generate, SeedSource};
use crate::views::ViewSet;

#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    seeds: SeedSource,
    table: PerformanceTable,
    criteria: FilterCriteria,
    filtered: PerformanceTable,
    views: ViewSet,
}

impl Dashboard {
    /// Validate `config`, generate the session's table, and derive the
    /// default (unfiltered) views.
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut seeds = SeedSource::new(config.seed);
        let table = generate(&config, &mut seeds.next_rng());
        let criteria = FilterCriteria::for_table(&table);
        let filtered = criteria.apply(&table);
        let views = ViewSet::derive(&filtered, &criteria.selection);

        tracing::info!(
            funds = config.funds.len(),
            start = config.start_year,
            end = config.end_year,
            seeded = config.seed.is_some(),
            "dashboard session started"
        );

        Ok(Self {
            config,
            seeds,
            table,
            criteria,
            filtered,
            views,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn table(&self) -> &PerformanceTable {
        &self.table
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &PerformanceTable {
        &self.filtered
    }

    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    /// How many tables this session has generated, including the first.
    pub fn generation(&self) -> u64 {
        self.seeds.generation()
    }

    /// Re-run the filter stage and every derivation.
    pub fn refresh(&mut self) {
        self.filtered = self.criteria.apply(&self.table);
        self.views = ViewSet::derive(&self.filtered, &self.criteria.selection);
        tracing::debug!(
            records = self.filtered.len(),
            selected = self.criteria.selection.len(),
            start = self.criteria.years.start(),
            end = self.criteria.years.end(),
            "views refreshed"
        );
    }

    /// Flip one fund. Returns whether it is selected afterwards.
    pub fn toggle_fund(&mut self, fund: &str) -> bool {
        let selected = self.criteria.selection.toggle(fund);
        self.refresh();
        selected
    }

    pub fn select_all_funds(&mut self) {
        self.criteria.selection.select_all();
        self.refresh();
    }

    pub fn clear_funds(&mut self) {
        self.criteria.selection.clear();
        self.refresh();
    }

    /// Replace the year range. Out-of-bounds ends are clamped to the data's
    /// years; an inverted pair is rejected and leaves the range unchanged.
    pub fn set_year_range(&mut self, start: i32, end: i32) -> Result<YearRange, FilterError> {
        let range = YearRange::new(start, end)?.clamp_to(self.table.bounds());
        self.criteria.years = range;
        self.refresh();
        Ok(range)
    }

    /// Move the range start by `delta` years.
    pub fn shift_start(&mut self, delta: i32) -> YearRange {
        self.criteria.years = self.criteria.years.shift_start(delta, self.table.bounds());
        self.refresh();
        self.criteria.years
    }

    /// Move the range end by `delta` years.
    pub fn shift_end(&mut self, delta: i32) -> YearRange {
        self.criteria.years = self.criteria.years.shift_end(delta, self.table.bounds());
        self.refresh();
        self.criteria.years
    }

    /// Back to every fund over the full year span.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::for_table(&self.table);
        self.refresh();
    }

    /// Draw a new table, keeping the current filter inputs.
    pub fn regenerate(&mut self) {
        self.table = generate(&self.config, &mut self.seeds.next_rng());
        tracing::info!(generation = self.seeds.generation(), "regenerated performance table");
        self.refresh();
    }
}
