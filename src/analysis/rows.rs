//! Row packing into compact integer fingerprints
//!
//! A row of binary cells is identified by a `u32` with cell 0 in the most
//! significant used bit. Two rows are the same row exactly when their
//! fingerprints are equal; no other row metadata participates in identity.

use ndarray::ArrayView1;

/// Widest row a fingerprint can hold
pub const MAX_ROW_WIDTH: usize = u32::BITS as usize;

/// Pack a row of cells into a fingerprint, cell 0 first
///
/// Non-zero cells read as solid. Rows wider than [`MAX_ROW_WIDTH`] must be
/// rejected before reaching this function; excess leading cells would be
/// shifted out of the fingerprint.
pub fn encode_row(cells: ArrayView1<'_, u8>) -> u32 {
    cells
        .iter()
        .fold(0u32, |map, &cell| (map << 1) | u32::from(cell != 0))
}

/// Extract cell `index` from a fingerprint of the given row width
///
/// Exact inverse of [`encode_row`] for any `index < width <= MAX_ROW_WIDTH`.
/// Out-of-range widths and indices read as empty cells.
pub const fn decode_cell(fingerprint: u32, width: usize, index: usize) -> u8 {
    if width == 0 || width > MAX_ROW_WIDTH || index >= width {
        return 0;
    }

    let mask = 1u32 << (width - 1 - index);
    if fingerprint & mask != 0 { 1 } else { 0 }
}
