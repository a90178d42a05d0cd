//! Synthetic performance generator.
//!
//! Produces the dense `{funds} × {years}` table with one uniformly drawn
//! performance value per pair. Enumeration is fund-major: all years of the
//! first fund, then all years of the second, and so on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DashboardConfig;
use crate::domain::{PerformanceRecord, PerformanceTable};

/// Source of randomness for a session.
///
/// Seeded sessions derive one sub-seed per generation, so regenerating walks
/// a reproducible sequence of tables. Unseeded sessions pull fresh entropy
/// every time.
#[derive(Debug, Clone)]
pub struct SeedSource {
    seed: Option<u64>,
    generation: u64,
}

impl SeedSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            generation: 0,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// How many RNGs this source has handed out.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// RNG for the next generation.
    pub fn next_rng(&mut self) -> StdRng {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.generation)),
            None => StdRng::from_entropy(),
        };
        self.generation += 1;
        rng
    }
}

/// Generate the full table for a validated config.
pub fn generate<R: Rng>(config: &DashboardConfig, rng: &mut R) -> PerformanceTable {
    let bounds = config.year_bounds();
    let range = config.performance.low..config.performance.high;

    let mut records = Vec::with_capacity(config.funds.len() * bounds.len());
    for fund in &config.funds {
        for year in bounds.years() {
            records.push(PerformanceRecord::new(
                year,
                fund.clone(),
                rng.gen_range(range.clone()),
            ));
        }
    }

    tracing::debug!(
        funds = config.funds.len(),
        years = bounds.len(),
        records = records.len(),
        "generated performance table"
    );

    PerformanceTable::from_trusted(config.funds.clone(), bounds, records)
}
