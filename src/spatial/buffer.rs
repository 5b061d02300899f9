//! Upward-scrolling cell buffer fed one synthesized row at a time

use crate::analysis::rows;
use ndarray::Array2;

/// Mutable `out_height x width` buffer of palette indices
///
/// Rows shift up one slot per frame and the freed bottom row receives the
/// next sampled row pattern. The previous top row is discarded, not
/// rotated.
#[derive(Debug, Clone)]
pub struct ScrollBuffer {
    cells: Array2<u8>,
}

impl ScrollBuffer {
    /// Allocate a blank buffer of the given geometry
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::zeros((height, width)),
        }
    }

    /// Cells per row
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of visible rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Shift every row up one slot and blank the bottom row
    pub fn scroll(&mut self) {
        let (height, width) = self.cells.dim();

        for y in 1..height {
            for x in 0..width {
                let below = self.cells.get([y, x]).copied().unwrap_or(0);
                if let Some(cell) = self.cells.get_mut([y - 1, x]) {
                    *cell = below;
                }
            }
        }

        if height > 0 {
            for x in 0..width {
                if let Some(cell) = self.cells.get_mut([height - 1, x]) {
                    *cell = 0;
                }
            }
        }
    }

    /// Unpack a row fingerprint into the bottom row
    ///
    /// Writes exactly `row_width` cells with the codec's bit convention;
    /// `row_width` must equal the buffer width.
    pub fn write_bottom_row(&mut self, fingerprint: u32, row_width: usize) {
        let height = self.cells.nrows();
        if height == 0 {
            return;
        }

        for index in 0..row_width {
            if let Some(cell) = self.cells.get_mut([height - 1, index]) {
                *cell = rows::decode_cell(fingerprint, row_width, index);
            }
        }
    }

    /// The underlying cell grid, row-major, top row first
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }
}
