//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. Density — the generated table holds every (year, fund) pair exactly once
//! 2. Membership — filtering keeps exactly the matching records
//! 3. Idempotence — filtering a filtered table changes nothing
//! 4. Statistics — count and mean agree with the filtered records

use std::collections::HashSet;

use fundlab_core::views::statistics;
use fundlab_core::{
    filter, generate, DashboardConfig, FundSelection, PerformanceBounds, PerformanceTable,
    YearRange,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_config() -> impl Strategy<Value = DashboardConfig> {
    (1990..2010_i32, 5..15_i32, 1..8_usize, 0.0..10.0_f64, 1.0..30.0_f64).prop_map(
        |(start, years, funds, low, width)| DashboardConfig {
            start_year: start,
            end_year: start + years - 1,
            funds: (0..funds).map(|i| format!("Fund {i}")).collect(),
            performance: PerformanceBounds {
                low,
                high: low + width,
            },
            seed: None,
        },
    )
}

fn table_for(config: &DashboardConfig, seed: u64) -> PerformanceTable {
    generate(config, &mut StdRng::seed_from_u64(seed))
}

/// A config, a seed, a fund mask, and a raw year pair to order.
fn arb_case() -> impl Strategy<Value = (DashboardConfig, u64, Vec<bool>, i32, i32)> {
    arb_config().prop_flat_map(|config| {
        let n = config.funds.len();
        let (lo, hi) = (config.start_year - 3, config.end_year + 3);
        (
            Just(config),
            any::<u64>(),
            proptest::collection::vec(any::<bool>(), n),
            lo..=hi,
            lo..=hi,
        )
    })
}

fn selection_from_mask(table: &PerformanceTable, mask: &[bool]) -> FundSelection {
    let names: Vec<&str> = table
        .funds()
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(f, _)| f.as_str())
        .collect();
    FundSelection::from_names(table.funds(), &names)
}

// ── 1. Density ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_table_is_dense(config in arb_config(), seed in any::<u64>()) {
        let table = table_for(&config, seed);
        let years = (config.end_year - config.start_year + 1) as usize;
        prop_assert_eq!(table.len(), config.funds.len() * years);

        let keys: HashSet<(i32, &str)> =
            table.records().iter().map(|r| (r.year, r.fund.as_str())).collect();
        prop_assert_eq!(keys.len(), table.len());

        for rec in table.records() {
            prop_assert!(rec.year >= config.start_year && rec.year <= config.end_year);
            prop_assert!(config.funds.contains(&rec.fund));
            prop_assert!(rec.performance_percent >= config.performance.low);
            prop_assert!(rec.performance_percent < config.performance.high);
        }
    }
}

// ── 2. Membership ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filter_keeps_exactly_matching_records(case in arb_case()) {
        let (config, seed, mask, a, b) = case;
        let table = table_for(&config, seed);
        let selection = selection_from_mask(&table, &mask);
        let years = YearRange::new(a.min(b), a.max(b)).unwrap();
        let filtered = filter(&table, &selection, years);

        let expected: Vec<_> = table
            .records()
            .iter()
            .filter(|r| selection.contains(&r.fund) && years.contains(r.year))
            .cloned()
            .collect();
        prop_assert_eq!(filtered.records(), expected.as_slice());

        let in_range = (config.start_year..=config.end_year)
            .filter(|y| years.contains(*y))
            .count();
        prop_assert_eq!(filtered.len(), selection.len() * in_range);
    }
}

// ── 3. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn filtering_is_idempotent(case in arb_case()) {
        let (config, seed, mask, a, b) = case;
        let table = table_for(&config, seed);
        let selection = selection_from_mask(&table, &mask);
        let years = YearRange::new(a.min(b), a.max(b)).unwrap();

        let once = filter(&table, &selection, years);
        let twice = filter(&once, &selection, years);
        prop_assert_eq!(once, twice);
    }
}

// ── 4. Statistics ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn statistics_count_and_mean(case in arb_case()) {
        let (config, seed, mask, a, b) = case;
        let table = table_for(&config, seed);
        let selection = selection_from_mask(&table, &mask);
        let years = YearRange::new(a.min(b), a.max(b)).unwrap();
        let filtered = filter(&table, &selection, years);

        let view = statistics::derive(&filtered, &selection);
        if filtered.is_empty() {
            prop_assert!(view.is_no_data());
            return Ok(());
        }
        let view = view.as_ready().unwrap();
        prop_assert_eq!(view.rows.len(), selection.len());

        for row in &view.rows {
            let values: Vec<f64> = filtered
                .records()
                .iter()
                .filter(|r| r.fund == row.fund)
                .map(|r| r.performance_percent)
                .collect();
            let summary = row.summary.unwrap();
            prop_assert_eq!(summary.count, values.len());
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            prop_assert!((summary.mean - mean).abs() < 1e-9);
            prop_assert!(summary.min <= summary.q1 && summary.q1 <= summary.median);
            prop_assert!(summary.median <= summary.q3 && summary.q3 <= summary.max);
        }
    }
}
