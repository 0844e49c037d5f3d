//! Views: what a cell renders.
//!
//! A view paints one aspect of a cell (text, background, selection
//! highlight) into the rectangle its layout assigned. Views are shared
//! between schemas with `Rc` and never mutated while drawing.
//!
//! # Module Structure
//!
//! - `layout`: `Layout` - placement and size negotiation inside a cell
//! - `text`: `ViewText` - single-line text from a callback, elided on demand;
//!   `ViewTextOrHint` - the same with a dimmed hint in place of some values
//! - `fill`: `ViewFill` - solid background
//! - `selection`: `Selection` and `ViewSelection` - selected-cell highlight

pub mod fill;
pub mod layout;
pub mod selection;
pub mod text;

pub use fill::ViewFill;
pub use layout::{Layout, LayoutInfo, LayoutKind};
pub use selection::{Selection, ViewSelection};
pub use text::{Elide, ViewText, ViewTextOrHint};

use crate::model::{CellId, Rect, Size};
use crate::render::{GuiContext, Surface};

/// Renders one aspect of a cell.
///
/// `cell` is always the absolute (model) coordinate.
pub trait View {
    /// Natural size of the view for `cell`.
    fn size(&self, ctx: &GuiContext, cell: CellId) -> Size;

    /// Paint the view into `rect`.
    fn draw(&self, surface: &mut dyn Surface, ctx: &GuiContext, cell: CellId, rect: Rect);

    /// Plain-text content, if the view has any.
    fn text(&self, _cell: CellId) -> Option<String> {
        None
    }

    /// Tooltip for `cell` drawn in `rect`, if any.
    fn tooltip_text(&self, _ctx: &GuiContext, _cell: CellId, _rect: Rect) -> Option<String> {
        None
    }
}
