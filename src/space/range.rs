//! Cell ranges used to scope schemas and selections.

use crate::model::{CellId, CellRange};
use std::fmt;
use std::rc::Rc;

/// A set of absolute cells.
#[derive(Clone)]
pub enum Range {
    /// Every cell.
    All,
    /// Every cell of one row.
    Row(usize),
    /// Every cell of one column.
    Column(usize),
    /// An inclusive rectangle of cells.
    Rect(CellRange),
    /// Cells accepted by a predicate.
    Callback(Rc<dyn Fn(CellId) -> bool>),
}

impl Range {
    /// Range defined by a predicate.
    pub fn callback(predicate: impl Fn(CellId) -> bool + 'static) -> Self {
        Range::Callback(Rc::new(predicate))
    }

    /// True if `cell` belongs to the range.
    pub fn contains(&self, cell: CellId) -> bool {
        match self {
            Range::All => true,
            Range::Row(row) => cell.row == *row,
            Range::Column(column) => cell.column == *column,
            Range::Rect(range) => range.contains(cell),
            Range::Callback(predicate) => predicate(cell),
        }
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::All => write!(f, "All"),
            Range::Row(row) => f.debug_tuple("Row").field(row).finish(),
            Range::Column(column) => f.debug_tuple("Column").field(column).finish(),
            Range::Rect(range) => f.debug_tuple("Rect").field(range).finish(),
            Range::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_column_ranges() {
        assert!(Range::Row(3).contains(CellId::new(3, 99)));
        assert!(!Range::Row(3).contains(CellId::new(4, 0)));
        assert!(Range::Column(5).contains(CellId::new(0, 5)));
        assert!(!Range::Column(5).contains(CellId::new(5, 0)));
        assert!(Range::All.contains(CellId::new(1000, 1000)));
    }

    #[test]
    fn rect_range_is_inclusive() {
        let range = Range::Rect(CellRange::new(CellId::new(1, 1), CellId::new(2, 2)));
        assert!(range.contains(CellId::new(2, 2)));
        assert!(!range.contains(CellId::new(0, 1)));
    }

    #[test]
    fn callback_range() {
        let range = Range::callback(|cell| cell.column != 5);
        assert!(range.contains(CellId::new(0, 4)));
        assert!(!range.contains(CellId::new(0, 5)));
        assert_eq!(format!("{:?}", range), "Callback(..)");
    }
}
