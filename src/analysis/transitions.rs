//! Weighted row transition table built from one example level
//!
//! Deduplicates the level's rows into fingerprint entries and counts, for
//! every row occurrence, one edge to each cyclic vertical neighbor. The
//! resulting weight matrix drives the random walk that synthesizes new rows.

use crate::analysis::level::LevelGrid;
use crate::analysis::rows::{self, MAX_ROW_WIDTH};
use crate::io::error::{GeneratorError, Result};
use ndarray::Array2;
use std::fmt;

/// One distinct row pattern discovered in the level
#[derive(Debug, Clone, Copy)]
pub struct RowEntry {
    /// Packed cell pattern identifying the row
    pub fingerprint: u32,
    /// Sum of outgoing edge weights across all neighbors
    pub total_transitions: u32,
}

/// Row adjacency statistics for one example level
///
/// Entries carry a dense index assigned in order of first appearance,
/// scanning the level top to bottom. `weight(a, b)` counts how often a row
/// with entry `a` sat directly above or below a row with entry `b`, with
/// the level treated as vertically cyclic. For every entry the outgoing
/// weights sum to that entry's `total_transitions`.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    row_width: usize,
    entries: Vec<RowEntry>,
    weights: Array2<u32>,
}

impl TransitionTable {
    /// Build the table from a level grid
    ///
    /// Scans the level once to discover distinct fingerprints and assign
    /// row entries, then once more to accumulate neighbor weights. Every
    /// row contributes one edge to its successor and one to its
    /// predecessor, both taken modulo the level height; at height 1 both
    /// neighbors are the row itself and the same self-edge is counted
    /// twice.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidWidth`] if the level is wider than
    /// a fingerprint can hold, and [`GeneratorError::EmptyLevel`] if it
    /// has no rows. Both are checked before any construction happens.
    pub fn build(level: &LevelGrid) -> Result<Self> {
        let width = level.width();
        let height = level.height();

        if width > MAX_ROW_WIDTH {
            return Err(GeneratorError::InvalidWidth {
                width,
                max: MAX_ROW_WIDTH,
            });
        }
        if height == 0 {
            return Err(GeneratorError::EmptyLevel);
        }

        let mut entries: Vec<RowEntry> = Vec::with_capacity(height);
        let mut row_entries = Vec::with_capacity(height);

        for y in 0..height {
            let fingerprint = rows::encode_row(level.row(y));
            let index = entries
                .iter()
                .position(|entry| entry.fingerprint == fingerprint)
                .unwrap_or_else(|| {
                    entries.push(RowEntry {
                        fingerprint,
                        total_transitions: 0,
                    });
                    entries.len() - 1
                });
            row_entries.push(index);
        }

        let num_entries = entries.len();
        let mut weights = Array2::<u32>::zeros((num_entries, num_entries));

        for (y, &current) in row_entries.iter().enumerate() {
            let below = row_entries.get((y + 1) % height).copied().unwrap_or(current);
            let above = row_entries
                .get((y + height - 1) % height)
                .copied()
                .unwrap_or(current);

            if let Some(weight) = weights.get_mut([current, below]) {
                *weight += 1;
            }
            if let Some(weight) = weights.get_mut([current, above]) {
                *weight += 1;
            }
            if let Some(entry) = entries.get_mut(current) {
                entry.total_transitions += 2;
            }
        }

        Ok(Self {
            row_width: width,
            entries,
            weights,
        })
    }

    /// Number of distinct rows in the table
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Cells per row
    pub const fn row_width(&self) -> usize {
        self.row_width
    }

    /// Dense index of the entry holding `fingerprint`, if the level had it
    ///
    /// Linear scan; table sizes are bounded by the level height.
    pub fn entry_index(&self, fingerprint: u32) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.fingerprint == fingerprint)
    }

    /// Fingerprint stored at `entry`
    pub fn fingerprint(&self, entry: usize) -> Option<u32> {
        self.entries.get(entry).map(|e| e.fingerprint)
    }

    /// Sum of outgoing edge weights at `entry`; zero out of range
    pub fn total_transitions(&self, entry: usize) -> u32 {
        self.entries.get(entry).map_or(0, |e| e.total_transitions)
    }

    /// Observed adjacency count from entry `from` to entry `to`
    pub fn weight(&self, from: usize, to: usize) -> u32 {
        self.weights.get([from, to]).copied().unwrap_or(0)
    }

    /// All entries in first-appearance order
    pub fn entries(&self) -> &[RowEntry] {
        &self.entries
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distinct rows:")?;
        for entry in &self.entries {
            for index in 0..self.row_width {
                let cell = rows::decode_cell(entry.fingerprint, self.row_width, index);
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Transition weights:")?;
        for (from, entry) in self.entries.iter().enumerate() {
            for to in 0..self.entries.len() {
                write!(f, "{} ", self.weight(from, to))?;
            }
            writeln!(f, " = {}", entry.total_transitions)?;
        }

        Ok(())
    }
}
