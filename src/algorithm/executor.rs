//! Frame-by-frame generation driver
//!
//! Owns the transition table, the scrolling buffer, and the walk state.
//! Each cycle scrolls the buffer, unpacks the current row into the freed
//! bottom slot, and samples the next row; the caller renders the buffer
//! between cycles.

use crate::algorithm::sampler::RowSampler;
use crate::analysis::TransitionTable;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::ScrollBuffer;

/// Scrolling pattern generator walking a row transition table
#[derive(Debug)]
pub struct ScrollGenerator {
    table: TransitionTable,
    buffer: ScrollBuffer,
    sampler: RowSampler,
    current_entry: usize,
}

impl ScrollGenerator {
    /// Create a generator with an output buffer of `out_height` rows
    ///
    /// The walk starts at a uniformly random entry and the buffer starts
    /// blank; call [`Self::fill`] before emitting the first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if `out_height` is zero.
    pub fn new(
        table: TransitionTable,
        out_height: usize,
        mut sampler: RowSampler,
    ) -> Result<Self> {
        if out_height == 0 {
            return Err(invalid_parameter(
                "out_height",
                &out_height,
                &"the output must be at least one row tall",
            ));
        }

        let buffer = ScrollBuffer::new(table.row_width(), out_height);
        let current_entry = sampler.initial_entry(&table);

        Ok(Self {
            table,
            buffer,
            sampler,
            current_entry,
        })
    }

    /// Run one scroll/write/sample cycle
    ///
    /// The current row lands in the bottom slot; the walk then advances to
    /// the row the next cycle will write.
    pub fn advance(&mut self) {
        self.buffer.scroll();

        let fingerprint = self.table.fingerprint(self.current_entry).unwrap_or(0);
        self.buffer
            .write_bottom_row(fingerprint, self.table.row_width());

        self.current_entry = self.sampler.next_entry(&self.table, self.current_entry);
    }

    /// Run one cycle per buffer row so the first frame starts full
    pub fn fill(&mut self) {
        for _ in 0..self.buffer.height() {
            self.advance();
        }
    }

    /// The output buffer in its current state
    pub const fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    /// The transition table driving the walk
    pub const fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Dense index of the row the next cycle will write
    pub const fn current_entry(&self) -> usize {
        self.current_entry
    }
}
