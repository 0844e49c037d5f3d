//! Layout negotiation for views stacked inside one cell.
//!
//! A cell lays out its views in schema order. Each layout carves the view's
//! rectangle out of the remaining cell rectangle and, unless transparent,
//! shrinks what is left for the next view. Size negotiation runs the same
//! sequence over natural sizes to produce a cell size hint.

use crate::model::{Rect, Size};

/// Where a view sits inside the remaining cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Centred on both axes.
    Center,
    /// Whole remaining rectangle.
    Client,
    /// Against the left edge.
    Left,
    /// Against the right edge.
    Right,
    /// Against the top edge.
    Top,
    /// Against the bottom edge.
    Bottom,
}

/// Rectangles threaded through a cell's layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Remaining cell area available to subsequent views.
    pub item_rect: Rect,
    /// Area assigned to the view just laid out.
    pub view_rect: Rect,
}

impl LayoutInfo {
    /// Start a layout pass over a full cell rectangle.
    pub fn new(item_rect: Rect) -> Self {
        Self {
            item_rect,
            view_rect: Rect::default(),
        }
    }
}

/// A layout rule: kind plus whether it consumes space.
///
/// Transparent layouts leave `item_rect` untouched, which is how full-cell
/// backgrounds coexist with the views stacked on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Placement rule.
    pub kind: LayoutKind,
    /// If true, the layout does not shrink `item_rect`.
    pub transparent: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self::client()
    }
}

impl Layout {
    /// Non-transparent layout of the given kind.
    pub const fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            transparent: false,
        }
    }

    /// Centred view.
    pub const fn center() -> Self {
        Self::new(LayoutKind::Center)
    }

    /// View filling the remaining rectangle.
    pub const fn client() -> Self {
        Self::new(LayoutKind::Client)
    }

    /// Transparent client layout, for backgrounds and overlays.
    pub const fn background() -> Self {
        Self::client().transparent()
    }

    /// View against the left edge.
    pub const fn left() -> Self {
        Self::new(LayoutKind::Left)
    }

    /// View against the right edge.
    pub const fn right() -> Self {
        Self::new(LayoutKind::Right)
    }

    /// View against the top edge.
    pub const fn top() -> Self {
        Self::new(LayoutKind::Top)
    }

    /// View against the bottom edge.
    pub const fn bottom() -> Self {
        Self::new(LayoutKind::Bottom)
    }

    /// Same layout, transparent.
    pub const fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    /// Place a view of natural size `view_size` and update `info`.
    pub fn do_layout(&self, view_size: Size, info: &mut LayoutInfo) {
        info.view_rect = info.item_rect;
        let view = &mut info.view_rect;

        match self.kind {
            LayoutKind::Center => {
                let dh = (info.item_rect.height() - view_size.height) / 2;
                if dh > 0 {
                    view.set_top(view.top + dh);
                    view.set_bottom(view.bottom - dh);
                }
                let dw = (info.item_rect.width() - view_size.width) / 2;
                if dw > 0 {
                    view.set_left(view.left + dw);
                    view.set_right(view.right - dw);
                }
                // centred views never consume space
                return;
            }
            LayoutKind::Client => {}
            LayoutKind::Left => {
                view.set_right(view.right.min(view.left + view_size.width));
            }
            LayoutKind::Right => {
                view.set_left(view.left.max(view.right - view_size.width));
            }
            LayoutKind::Top => {
                view.set_bottom(view.bottom.min(view.top + view_size.height));
            }
            LayoutKind::Bottom => {
                view.set_top(view.top.max(view.bottom - view_size.height));
            }
        }

        if self.transparent {
            return;
        }
        let view = info.view_rect;
        match self.kind {
            LayoutKind::Center => {}
            LayoutKind::Client | LayoutKind::Left => info.item_rect.set_left(view.right + 1),
            LayoutKind::Right => info.item_rect.set_right(view.left - 1),
            LayoutKind::Top => info.item_rect.set_top(view.bottom + 1),
            LayoutKind::Bottom => info.item_rect.set_bottom(view.top - 1),
        }
    }

    /// Grow an accumulated size hint by a view of natural size `view_size`.
    ///
    /// Centre and client take the max on both axes. Edge layouts add their
    /// extent plus a one-pixel separator along their axis.
    pub fn expand_size(&self, view_size: Size, size: &mut Size) {
        match self.kind {
            LayoutKind::Center | LayoutKind::Client => {
                size.width = size.width.max(view_size.width);
                size.height = size.height.max(view_size.height);
            }
            LayoutKind::Left | LayoutKind::Right => {
                size.width += view_size.width + 1;
                size.height = size.height.max(view_size.height);
            }
            LayoutKind::Top | LayoutKind::Bottom => {
                size.width = size.width.max(view_size.width);
                size.height += view_size.height + 1;
            }
        }
    }
}
