//! Level grid loading and validation
//!
//! A level is a rectangle of `'0'`/`'1'` characters, one row per line.
//! Parsing strips surrounding whitespace per line and rejects everything the
//! downstream analysis is not prepared to see: non-binary symbols, jagged
//! rows, empty input, and rows wider than a fingerprint can hold.

use crate::analysis::rows::MAX_ROW_WIDTH;
use crate::io::error::{GeneratorError, Result};
use ndarray::{Array2, ArrayView1};
use std::path::Path;

/// Rectangular grid of binary cells describing one example level
#[derive(Debug, Clone)]
pub struct LevelGrid {
    cells: Array2<u8>,
}

impl LevelGrid {
    /// Wrap an existing cell grid without validation
    ///
    /// Non-zero cells read as solid. Callers own the width and height
    /// contracts; transition table construction re-checks both before
    /// building anything.
    pub const fn from_cells(cells: Array2<u8>) -> Self {
        Self { cells }
    }

    /// Parse a level from its textual form
    ///
    /// Blank lines are skipped; each remaining line becomes one row.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::LevelParse`] for non-binary symbols or
    /// jagged rows, [`GeneratorError::EmptyLevel`] when no rows remain
    /// after skipping blanks, and [`GeneratorError::InvalidWidth`] for rows
    /// wider than a fingerprint can hold.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row_width = line.chars().count();
            if height == 0 {
                width = row_width;
            } else if row_width != width {
                return Err(GeneratorError::LevelParse {
                    reason: format!(
                        "row {} has {row_width} cells, expected {width}",
                        height + 1
                    ),
                });
            }

            for symbol in line.chars() {
                match symbol {
                    '0' => cells.push(0),
                    '1' => cells.push(1),
                    other => {
                        return Err(GeneratorError::LevelParse {
                            reason: format!("unexpected symbol '{other}' in row {}", height + 1),
                        });
                    }
                }
            }

            height += 1;
        }

        if height == 0 {
            return Err(GeneratorError::EmptyLevel);
        }
        if width > MAX_ROW_WIDTH {
            return Err(GeneratorError::InvalidWidth {
                width,
                max: MAX_ROW_WIDTH,
            });
        }

        let cells = Array2::from_shape_vec((height, width), cells).map_err(|e| {
            GeneratorError::LevelParse {
                reason: e.to_string(),
            }
        })?;

        Ok(Self { cells })
    }

    /// Load and parse a level from a text file
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::LevelLoad`] when the file cannot be read,
    /// plus everything [`Self::from_text`] rejects.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path_buf).map_err(|e| GeneratorError::LevelLoad {
            path: path_buf,
            source: e,
        })?;

        Self::from_text(&text)
    }

    /// Number of cells per row
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// View of row `y`
    ///
    /// # Panics
    ///
    /// Panics if `y >= height()`.
    pub fn row(&self, y: usize) -> ArrayView1<'_, u8> {
        self.cells.row(y)
    }

    /// The underlying cell grid, row-major
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }
}
