//! Cell selection and its highlight view.

use super::View;
use crate::model::{CellId, Rect, Size};
use crate::render::{GuiContext, Surface};
use crate::space::Range;
use std::cell::RefCell;
use std::rc::Rc;

/// Active cell plus a list of selected ranges (absolute coordinates).
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: Option<CellId>,
    ranges: Vec<Range>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle, for views and the host to hold at once.
    pub fn shared() -> Rc<RefCell<Selection>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// The focused cell.
    pub fn active(&self) -> Option<CellId> {
        self.active
    }

    /// Move the focus.
    pub fn set_active(&mut self, cell: Option<CellId>) {
        self.active = cell;
    }

    /// Replace the selected ranges with a single range.
    pub fn set_selection(&mut self, range: Range) {
        self.ranges = vec![range];
    }

    /// Add a range to the selection.
    pub fn add_range(&mut self, range: Range) {
        self.ranges.push(range);
    }

    /// Drop all ranges and the active cell.
    pub fn clear(&mut self) {
        self.active = None;
        self.ranges.clear();
    }

    /// True if `cell` is in any selected range.
    pub fn is_selected(&self, cell: CellId) -> bool {
        self.ranges.iter().any(|range| range.contains(cell))
    }

    /// True if `cell` is the active cell.
    pub fn is_active(&self, cell: CellId) -> bool {
        self.active == Some(cell)
    }
}

/// Paints the selection state of a cell as a background.
///
/// Meant to be bound with `Layout::background()` so other views draw over it.
#[derive(Debug, Clone)]
pub struct ViewSelection {
    selection: Rc<RefCell<Selection>>,
}

impl ViewSelection {
    /// Highlight cells of `selection`.
    pub fn new(selection: Rc<RefCell<Selection>>) -> Self {
        Self { selection }
    }
}

impl View for ViewSelection {
    fn size(&self, _ctx: &GuiContext, _cell: CellId) -> Size {
        Size::ZERO
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GuiContext, cell: CellId, rect: Rect) {
        let selection = self.selection.borrow();
        if selection.is_active(cell) {
            surface.fill_rect(rect, ctx.palette.active);
        } else if selection.is_selected(cell) {
            surface.fill_rect(rect, ctx.palette.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn selection_membership() {
        let mut selection = Selection::new();
        selection.set_selection(Range::Column(3));
        selection.add_range(Range::Row(0));
        selection.set_active(Some(CellId::new(1, 1)));

        assert!(selection.is_selected(CellId::new(9, 3)));
        assert!(selection.is_selected(CellId::new(0, 9)));
        assert!(!selection.is_selected(CellId::new(1, 1)));
        assert!(selection.is_active(CellId::new(1, 1)));

        selection.clear();
        assert!(!selection.is_selected(CellId::new(9, 3)));
        assert_eq!(selection.active(), None);
    }

    #[test]
    fn view_paints_active_over_selected() {
        let selection = Selection::shared();
        selection.borrow_mut().set_selection(Range::Column(1));
        selection.borrow_mut().set_active(Some(CellId::new(0, 1)));

        let ctx = GuiContext::default();
        let view = ViewSelection::new(Rc::clone(&selection));
        let mut surface = RecordingSurface::new();
        let rect = Rect::new(0, 0, 10, 10);

        view.draw(&mut surface, &ctx, CellId::new(0, 1), rect);
        view.draw(&mut surface, &ctx, CellId::new(1, 1), rect);
        view.draw(&mut surface, &ctx, CellId::new(1, 2), rect);

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Fill {
                    rect,
                    color: ctx.palette.active
                },
                DrawCommand::Fill {
                    rect,
                    color: ctx.palette.selection
                },
            ]
        );
    }
}
