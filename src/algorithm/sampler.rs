//! Weighted random sampling of successor rows

use crate::analysis::TransitionTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random selector drawing successive rows from a transition table
///
/// Holds its generator by value so a fixed seed reproduces the entire walk;
/// unseeded construction draws from the OS entropy source.
#[derive(Debug)]
pub struct RowSampler {
    rng: StdRng,
}

impl RowSampler {
    /// Create a sampler seeded from the OS entropy source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic sampler from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a uniformly random starting entry
    pub fn initial_entry(&mut self, table: &TransitionTable) -> usize {
        if table.num_entries() == 0 {
            return 0;
        }

        self.rng.random_range(0..table.num_entries())
    }

    /// Draw the next entry by weighted choice over `current`'s outgoing edges
    ///
    /// The draw range is `[0, total_transitions]` inclusive, one wider than
    /// the weight sum; a draw of exactly the total falls through the scan
    /// and selects the last entry with non-zero weight. Entries with zero
    /// weight from `current` are never selected.
    pub fn next_entry(&mut self, table: &TransitionTable, current: usize) -> usize {
        let total = table.total_transitions(current);
        let mut remaining = self.rng.random_range(0..=total);
        let mut last_weighted = current;

        for candidate in 0..table.num_entries() {
            let weight = table.weight(current, candidate);
            if weight == 0 {
                continue;
            }

            if remaining < weight {
                return candidate;
            }

            remaining -= weight;
            last_weighted = candidate;
        }

        last_weighted
    }
}

impl Default for RowSampler {
    fn default() -> Self {
        Self::new()
    }
}
