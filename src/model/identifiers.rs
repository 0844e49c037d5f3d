//! Cell coordinate newtypes.
//!
//! A missing or unmappable coordinate is `None` in an `Option<CellId>`;
//! there is no sentinel value.

use std::fmt;

/// Grid cell coordinate (row, column), 0-indexed.
///
/// Whether the coordinate is absolute (model space) or visible (display
/// space, after hiding and reordering lines) depends on where it came from;
/// the grid converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellId {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
}

impl CellId {
    /// Create a new cell id.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Component-wise offset of `self` from `origin`.
    ///
    /// Returns `None` if `self` lies above or left of `origin`.
    pub fn offset_from(&self, origin: CellId) -> Option<CellId> {
        Some(CellId::new(
            self.row.checked_sub(origin.row)?,
            self.column.checked_sub(origin.column)?,
        ))
    }

    /// Component-wise minimum.
    pub fn min(self, other: CellId) -> CellId {
        CellId::new(self.row.min(other.row), self.column.min(other.column))
    }

    /// Component-wise maximum.
    pub fn max(self, other: CellId) -> CellId {
        CellId::new(self.row.max(other.row), self.column.max(other.column))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

/// Inclusive rectangular range of cells.
///
/// # Invariants
/// - `start.row <= end.row` and `start.column <= end.column`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Top-left cell (inclusive).
    pub start: CellId,
    /// Bottom-right cell (inclusive).
    pub end: CellId,
}

impl CellRange {
    /// Create a new range.
    ///
    /// # Panics
    /// In debug builds, panics if `start` is not component-wise `<= end`.
    pub fn new(start: CellId, end: CellId) -> Self {
        debug_assert!(
            start.row <= end.row && start.column <= end.column,
            "CellRange start {} must not exceed end {}",
            start,
            end
        );
        Self { start, end }
    }

    /// Range covering a single cell.
    pub fn single(cell: CellId) -> Self {
        Self {
            start: cell,
            end: cell,
        }
    }

    /// Number of rows spanned.
    pub fn rows(&self) -> usize {
        self.end.row - self.start.row + 1
    }

    /// Number of columns spanned (the row stride of a flattened frame).
    pub fn columns(&self) -> usize {
        self.end.column - self.start.column + 1
    }

    /// Number of cells in the range.
    pub fn len(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Ranges always contain at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True if `cell` lies inside the range, edges included.
    pub fn contains(&self, cell: CellId) -> bool {
        cell.row >= self.start.row
            && cell.row <= self.end.row
            && cell.column >= self.start.column
            && cell.column <= self.end.column
    }

    /// True if `cell` lies strictly inside the range (edges excluded).
    pub fn contains_strict(&self, cell: CellId) -> bool {
        cell.row > self.start.row
            && cell.row < self.end.row
            && cell.column > self.start.column
            && cell.column < self.end.column
    }

    /// Overlap of two ranges, or `None` if they are disjoint.
    pub fn intersection(&self, other: &CellRange) -> Option<CellRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start.row > end.row || start.column > end.column {
            None
        } else {
            Some(CellRange { start, end })
        }
    }

    /// Row-major flat index of `cell` within the range.
    pub fn flat_index(&self, cell: CellId) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let offset = cell.offset_from(self.start)?;
        Some(offset.row * self.columns() + offset.column)
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> {
        let CellRange { start, end } = *self;
        (start.row..=end.row)
            .flat_map(move |row| (start.column..=end.column).map(move |column| CellId::new(row, column)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(r0: usize, c0: usize, r1: usize, c1: usize) -> CellRange {
        CellRange::new(CellId::new(r0, c0), CellId::new(r1, c1))
    }

    #[test]
    fn offset_from_subtracts_componentwise() {
        let cell = CellId::new(5, 7);
        assert_eq!(cell.offset_from(CellId::new(2, 3)), Some(CellId::new(3, 4)));
        assert_eq!(cell.offset_from(CellId::new(6, 0)), None);
    }

    #[test]
    fn contains_includes_boundary() {
        let r = range(1, 1, 3, 3);
        assert!(r.contains(CellId::new(1, 1)));
        assert!(r.contains(CellId::new(3, 3)));
        assert!(!r.contains(CellId::new(0, 1)));
        assert!(!r.contains(CellId::new(1, 4)));
    }

    #[test]
    fn contains_strict_excludes_boundary() {
        let r = range(1, 1, 3, 3);
        assert!(!r.contains_strict(CellId::new(1, 2)));
        assert!(!r.contains_strict(CellId::new(3, 2)));
        assert!(r.contains_strict(CellId::new(2, 2)));
    }

    #[test]
    fn intersection_of_overlapping_ranges() {
        let a = range(0, 0, 4, 1);
        let b = range(1, 0, 5, 3);
        assert_eq!(a.intersection(&b), Some(range(1, 0, 4, 1)));
        assert_eq!(a.intersection(&range(5, 5, 6, 6)), None);
    }

    #[test]
    fn flat_index_is_row_major() {
        let r = range(10, 20, 12, 22);
        assert_eq!(r.columns(), 3);
        assert_eq!(r.flat_index(CellId::new(10, 20)), Some(0));
        assert_eq!(r.flat_index(CellId::new(10, 22)), Some(2));
        assert_eq!(r.flat_index(CellId::new(11, 20)), Some(3));
        assert_eq!(r.flat_index(CellId::new(12, 22)), Some(8));
        assert_eq!(r.flat_index(CellId::new(13, 22)), None);
    }

    #[test]
    fn iter_visits_every_cell_in_flat_order() {
        let r = range(2, 3, 3, 5);
        let cells: Vec<_> = r.iter().collect();
        assert_eq!(cells.len(), r.len());
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(r.flat_index(*cell), Some(i));
        }
    }

    #[test]
    fn display_formats_brackets() {
        assert_eq!(CellId::new(1, 2).to_string(), "[1, 2]");
        assert_eq!(range(0, 0, 1, 1).to_string(), "[0, 0]..=[1, 1]");
    }
}
