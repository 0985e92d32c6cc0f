//! Piece shapes: small immutable boolean masks anchored at their top-left cell.

use core::fmt;

/// A rectangular mask of filled/empty cells.
///
/// Rows are bit-packed: bit `j` of `rows[i]` is mask cell (i, j). The
/// origin is mask cell (0, 0) and the width is the extent of the widest row.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Shape {
    name: &'static str,
    rows: &'static [u16],
    #[cfg_attr(feature = "std", serde(skip))]
    width: usize,
}

impl Shape {
    /// Create a shape from bit-packed rows.
    pub const fn new(name: &'static str, rows: &'static [u16]) -> Self {
        let mut width = 0;
        let mut i = 0;
        while i < rows.len() {
            let w = (u16::BITS - rows[i].leading_zeros()) as usize;
            if w > width {
                width = w;
            }
            i += 1;
        }
        Self { name, rows, width }
    }

    /// Shape's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bit-packed mask rows.
    pub fn rows(&self) -> &'static [u16] {
        self.rows
    }

    /// Number of mask rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of mask columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// True if mask cell (r, c) is filled. Cells outside the mask are empty.
    pub fn filled(&self, r: usize, c: usize) -> bool {
        c < self.width && self.rows.get(r).is_some_and(|bits| (bits >> c) & 1 == 1)
    }

    /// Number of filled cells.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Offsets of the filled cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height())
            .flat_map(move |r| (0..self.width).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.filled(r, c))
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shape {{ name: \"{}\", {}x{}, cells: {} }}",
            self.name,
            self.height(),
            self.width,
            self.cell_count()
        )
    }
}
