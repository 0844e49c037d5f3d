//! Binding of views to cell ranges.

use super::Range;
use crate::model::CellId;
use crate::view::{Layout, View};
use std::fmt;
use std::rc::Rc;

/// One view placed with one layout on every cell of a range.
///
/// A cell renders every schema whose range contains it, in the order the
/// schemas were added to the grid.
#[derive(Clone)]
pub struct Schema {
    /// Cells the binding applies to (absolute coordinates).
    pub range: Range,
    /// The view drawn in those cells.
    pub view: Rc<dyn View>,
    /// Where the view sits inside the cell.
    pub layout: Layout,
}

impl Schema {
    /// Attach `view` with `layout` to the cells in `range`.
    pub fn new(range: Range, view: Rc<dyn View>, layout: Layout) -> Self {
        Self { range, view, layout }
    }

    /// True if the binding covers the absolute cell.
    pub fn applies_to(&self, cell: CellId) -> bool {
        self.range.contains(cell)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("range", &self.range)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
