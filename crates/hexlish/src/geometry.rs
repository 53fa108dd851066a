//! Block placement on the grid.
//!
//! Blocks are laid out row-major: block `i` sits in column `i % blocks_per_row`
//! and row `i / blocks_per_row`.

use crate::{HexlishError, Result, BLOCK_SIZE, HEIGHT_LIMIT, WIDTH_LIMIT};

/// Grid column and row of block `index`.
///
/// # Panics
///
/// Panics if `blocks_per_row` is zero. Resolve a zero row width through
/// [`GridLayout::new`] first.
#[inline]
pub const fn position_of(index: usize, blocks_per_row: usize) -> (usize, usize) {
    (index % blocks_per_row, index / blocks_per_row)
}

/// Pixel coordinates of the top-left corner of block `index`.
///
/// Fails with [`HexlishError::InvalidDimensions`] if a grid holding that
/// block would exceed the canvas limits.
pub fn block_origin(index: usize, blocks_per_row: usize) -> Result<(u32, u32)> {
    let layout = GridLayout::new(index.saturating_add(1), blocks_per_row)?;
    Ok(layout.origin(index))
}

/// Canvas size in pixels for `symbol_count` blocks.
///
/// A `blocks_per_row` of zero puts every symbol on a single row. An empty
/// stream has zero rows and therefore zero height.
pub fn canvas_size(symbol_count: usize, blocks_per_row: usize) -> Result<(u32, u32)> {
    let layout = GridLayout::new(symbol_count, blocks_per_row)?;
    Ok((layout.width, layout.height))
}

/// Shape of the grid for one encode pass.
///
/// Construction validates the pixel dimensions, so every origin inside the
/// grid fits in `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub symbol_count: usize,
    pub blocks_per_row: usize,
    pub rows: usize,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl GridLayout {
    pub fn new(symbol_count: usize, blocks_per_row: usize) -> Result<Self> {
        let blocks_per_row = if blocks_per_row == 0 {
            symbol_count
        } else {
            blocks_per_row
        };
        let rows = if blocks_per_row == 0 {
            0
        } else {
            symbol_count.div_ceil(blocks_per_row)
        };

        let invalid = || HexlishError::InvalidDimensions {
            blocks_per_row,
            rows,
        };
        let width = to_pixels(blocks_per_row)
            .filter(|&w| w <= WIDTH_LIMIT)
            .ok_or_else(invalid)?;
        let height = to_pixels(rows)
            .filter(|&h| h <= HEIGHT_LIMIT)
            .ok_or_else(invalid)?;

        Ok(Self {
            symbol_count,
            blocks_per_row,
            rows,
            width,
            height,
        })
    }

    /// Number of padding blocks completing the last row.
    pub fn padding(&self) -> usize {
        self.rows * self.blocks_per_row - self.symbol_count
    }

    /// Pixel origin of block `index`, which must lie inside the grid.
    #[inline]
    pub fn origin(&self, index: usize) -> (u32, u32) {
        let (col, row) = position_of(index, self.blocks_per_row);
        (col as u32 * BLOCK_SIZE, row as u32 * BLOCK_SIZE)
    }
}

fn to_pixels(blocks: usize) -> Option<u32> {
    u32::try_from(blocks).ok()?.checked_mul(BLOCK_SIZE)
}
