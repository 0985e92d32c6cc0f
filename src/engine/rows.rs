//! Small fixed-capacity set of row indices.

use core::fmt;

/// Set of board rows, one bit per row index (< 16).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(into = "RowList"))]
pub struct RowSet {
    bits: u16,
}

impl RowSet {
    /// Largest row index (exclusive) the set can hold.
    pub const CAPACITY: usize = 16;

    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Inserts `row`; returns false if it was already present or out of range.
    pub fn insert(&mut self, row: usize) -> bool {
        if row >= Self::CAPACITY || self.contains(row) {
            return false;
        }
        self.bits |= 1 << row;
        true
    }

    /// Removes `row`; returns false if it was not present.
    pub fn remove(&mut self, row: usize) -> bool {
        if !self.contains(row) {
            return false;
        }
        self.bits &= !(1 << row);
        true
    }

    pub fn contains(&self, row: usize) -> bool {
        row < Self::CAPACITY && (self.bits >> row) & 1 == 1
    }

    /// Adds every row of `other`.
    pub fn merge(&mut self, other: RowSet) {
        self.bits |= other.bits;
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Rows in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let bits = self.bits;
        (0..Self::CAPACITY).filter(move |r| (bits >> r) & 1 == 1)
    }
}

impl FromIterator<usize> for RowSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = RowSet::new();
        for row in iter {
            set.insert(row);
        }
        set
    }
}

impl fmt::Debug for RowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Serialized form of a [`RowSet`]: the ascending list of rows.
#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct RowList(std::vec::Vec<usize>);

#[cfg(feature = "std")]
impl From<RowSet> for RowList {
    fn from(set: RowSet) -> Self {
        RowList(set.iter().collect())
    }
}
