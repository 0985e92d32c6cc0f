//! A fixed-size bitboard implementation using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid packed row by row: every row is one unsigned
//! integer `T` where bit `c` stands for column `c`. Packing by row keeps the
//! two hot queries of the game, "does this mask fit here" and "is this row
//! full", down to a handful of word operations.

use core::{any, fmt, mem};
use num_traits::{NumCast, PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board width N exceeds the bit width of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N={} exceeds T::BITS={}", n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored as `N` row words of type `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    rows: [T; N],
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Mask with the low `N` bits of a row set.
    #[inline]
    fn full_row() -> T {
        if N == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << N) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard {
            rows: [T::zero(); N],
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if N > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(((self.rows[row] >> col) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.rows[row] = self.rows[row] | (T::one() << col);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.rows[row] = self.rows[row] & !(T::one() << col);
        Ok(())
    }

    /// True iff every cell of `row` is set.
    #[inline]
    pub fn is_row_full(&self, row: usize) -> bool {
        row < N && self.rows[row] == Self::full_row()
    }

    /// True iff no cell of `row` is set.
    #[inline]
    pub fn is_row_empty(&self, row: usize) -> bool {
        row < N && self.rows[row].is_zero()
    }

    /// Checks whether a row-packed mask anchored at (`row`, `col`) lies
    /// entirely inside the board and touches no set bit.
    ///
    /// `mask` holds one word per mask row (bit `j` = mask column `j`) and
    /// `width` is the mask's column extent.
    pub fn fits(&self, mask: &[u16], width: usize, row: usize, col: usize) -> bool {
        if !Self::extent_fits(mask.len(), width, row, col) {
            return false;
        }
        mask.iter().enumerate().all(|(i, &bits)| match Self::shifted(bits, col) {
            Some(m) => (self.rows[row + i] & m).is_zero(),
            None => false,
        })
    }

    /// ORs a row-packed mask into the board. Fails without mutating if the
    /// mask would leave the board; overlap is not checked here.
    pub fn overlay(
        &mut self,
        mask: &[u16],
        width: usize,
        row: usize,
        col: usize,
    ) -> Result<(), BitBoardError> {
        if !Self::extent_fits(mask.len(), width, row, col) {
            return Err(BitBoardError::IndexOutOfBounds {
                row: row.saturating_add(mask.len().saturating_sub(1)),
                col: col.saturating_add(width.saturating_sub(1)),
            });
        }
        let mut next = self.rows;
        for (i, &bits) in mask.iter().enumerate() {
            let m = Self::shifted(bits, col)
                .ok_or(BitBoardError::IndexOutOfBounds { row: row + i, col })?;
            next[row + i] = next[row + i] | m;
        }
        self.rows = next;
        Ok(())
    }

    /// True iff a `height`×`width` box anchored at (`row`, `col`) stays on
    /// the board. Written without additions so huge coordinates cannot wrap.
    #[inline]
    fn extent_fits(height: usize, width: usize, row: usize, col: usize) -> bool {
        height <= N && width <= N && row <= N - height && col <= N - width
    }

    #[inline]
    fn shifted(bits: u16, col: usize) -> Option<T> {
        let m: T = NumCast::from(bits)?;
        Some((m << col) & Self::full_row())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Consumes the board and returns the raw row words.
    #[inline]
    pub fn into_rows(self) -> [T; N] {
        self.rows
    }

    /// Creates a bitboard from raw row words, masking out bits past column N.
    #[inline]
    pub fn from_rows(rows: [T; N]) -> Self {
        let full = Self::full_row();
        BitBoard {
            rows: rows.map(|r| r & full),
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    #[inline]
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board, row-major.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.rows[r] >> c) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.rows[r] >> c) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let (r, c) = (self.idx / N, self.idx % N);
            self.idx += 1;
            if ((self.board.rows[r] >> c) & T::one()) != T::zero() {
                return Some((r, c));
            }
        }
        None
    }
}
