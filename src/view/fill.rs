//! Solid background view.

use super::View;
use crate::model::{CellId, Rect, Size};
use crate::render::{GuiContext, Surface};
use ratatui::style::Color;

/// Fills its rectangle with one colour (palette background if unset).
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewFill {
    color: Option<Color>,
}

impl ViewFill {
    /// Fill with a fixed colour.
    pub fn new(color: Color) -> Self {
        Self { color: Some(color) }
    }

    /// Fill with the palette background.
    pub fn background() -> Self {
        Self { color: None }
    }
}

impl View for ViewFill {
    fn size(&self, _ctx: &GuiContext, _cell: CellId) -> Size {
        Size::ZERO
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GuiContext, _cell: CellId, rect: Rect) {
        surface.fill_rect(rect, self.color.unwrap_or(ctx.palette.background));
    }
}
