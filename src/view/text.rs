//! Single-line text views.
//!
//! [`ViewText`] draws a string from a callback, optionally elided to the
//! width it was given. Text that does not fit its rectangle doubles as the
//! cell's tooltip. [`ViewTextOrHint`] swaps in a dimmed hint for cells a
//! predicate selects (empty inputs, placeholders).

use super::View;
use crate::model::{CellId, Rect, Size};
use crate::render::{GuiContext, Surface};
use ratatui::layout::Alignment;
use ratatui::style::Color;
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

type TextFn = Box<dyn Fn(CellId) -> String>;
type TooltipFn = Box<dyn Fn(CellId) -> Option<String>>;
type HintFn = Box<dyn Fn(CellId) -> bool>;

const ELLIPSIS: char = '…';
const ELLIPSIS_WIDTH: usize = 1;

/// Where text that does not fit is shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Elide {
    /// Draw the full text and let the clip cut it.
    #[default]
    None,
    /// Keep the end: `…xyz`.
    Left,
    /// Keep both ends: `ab…yz`.
    Middle,
    /// Keep the start: `abc…`.
    Right,
}

/// Shorten `text` to at most `columns` display columns.
///
/// Text that fits, and [`Elide::None`], come back unchanged.
///
/// # Examples
///
/// ```
/// use cellgrid::view::text::{elide, Elide};
///
/// assert_eq!(elide("Item [12, 3]", 6, Elide::Right), "Item …");
/// assert_eq!(elide("Item [12, 3]", 6, Elide::Left), "…2, 3]");
/// assert_eq!(elide("Item [12, 3]", 6, Elide::Middle), "Ite…3]");
/// assert_eq!(elide("short", 6, Elide::Right), "short");
/// ```
pub fn elide(text: &str, columns: usize, mode: Elide) -> Cow<'_, str> {
    if text.width() <= columns {
        return Cow::Borrowed(text);
    }
    let budget = columns.saturating_sub(ELLIPSIS_WIDTH);

    let mut out = String::with_capacity(text.len());
    match mode {
        Elide::None => return Cow::Borrowed(text),
        _ if columns < ELLIPSIS_WIDTH => {}
        Elide::Right => {
            out.push_str(head(text, budget));
            out.push(ELLIPSIS);
        }
        Elide::Left => {
            out.push(ELLIPSIS);
            out.push_str(tail(text, budget));
        }
        Elide::Middle => {
            let back = budget / 2;
            out.push_str(head(text, budget - back));
            out.push(ELLIPSIS);
            out.push_str(tail(text, back));
        }
    }
    Cow::Owned(out)
}

/// Longest prefix at most `columns` wide.
fn head(text: &str, columns: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > columns {
            return &text[..index];
        }
    }
    text
}

/// Longest suffix at most `columns` wide.
fn tail(text: &str, columns: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > columns {
            return &text[index + ch.len_utf8()..];
        }
    }
    text
}

/// Draws the string produced by a callback.
///
/// # Examples
///
/// ```
/// use cellgrid::model::CellId;
/// use cellgrid::view::{View, ViewText};
///
/// let view = ViewText::new(|cell: CellId| format!("Item {}", cell));
/// assert_eq!(view.text(CellId::new(1, 2)).as_deref(), Some("Item [1, 2]"));
/// ```
pub struct ViewText {
    text: TextFn,
    tooltip: Option<TooltipFn>,
    alignment: Alignment,
    margin: i32,
    elide: Elide,
}

impl ViewText {
    /// Left-aligned, unelided text with a 2px horizontal margin.
    pub fn new(text: impl Fn(CellId) -> String + 'static) -> Self {
        Self {
            text: Box::new(text),
            tooltip: None,
            alignment: Alignment::Left,
            margin: 2,
            elide: Elide::None,
        }
    }

    /// Set horizontal alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the horizontal margin in pixels.
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin.max(0);
        self
    }

    /// Shorten text that does not fit.
    pub fn with_elide(mut self, elide: Elide) -> Self {
        self.elide = elide;
        self
    }

    /// Provide tooltips. They take precedence over the overflow tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Fn(CellId) -> Option<String> + 'static) -> Self {
        self.tooltip = Some(Box::new(tooltip));
        self
    }

    /// Horizontal alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Elide mode.
    pub fn elide_mode(&self) -> Elide {
        self.elide
    }

    fn measure(&self, ctx: &GuiContext, text: &str) -> Size {
        let columns = i32::try_from(text.width()).unwrap_or(i32::MAX / 2);
        Size::new(
            columns.saturating_mul(ctx.char_width) + 2 * self.margin,
            ctx.line_height,
        )
    }

    fn text_rect(&self, rect: Rect) -> Rect {
        let mut text_rect = rect;
        text_rect.set_left(rect.left + self.margin);
        text_rect.set_right(rect.right - self.margin);
        text_rect
    }

    /// Whole text columns available inside `rect`.
    fn columns_in(&self, ctx: &GuiContext, rect: Rect) -> usize {
        let width = self.text_rect(rect).width();
        if width <= 0 || ctx.char_width <= 0 {
            return 0;
        }
        usize::try_from(width / ctx.char_width).unwrap_or(0)
    }

    fn fits(&self, ctx: &GuiContext, text: &str, rect: Rect) -> bool {
        text.width() <= self.columns_in(ctx, rect)
    }

    fn draw_str(
        &self,
        surface: &mut dyn Surface,
        ctx: &GuiContext,
        text: &str,
        rect: Rect,
        color: Color,
    ) {
        let shown = elide(text, self.columns_in(ctx, rect), self.elide);
        if shown.is_empty() {
            return;
        }
        surface.draw_text(self.text_rect(rect), &shown, self.alignment, color);
    }
}

impl View for ViewText {
    fn size(&self, ctx: &GuiContext, cell: CellId) -> Size {
        self.measure(ctx, &(self.text)(cell))
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GuiContext, cell: CellId, rect: Rect) {
        self.draw_str(surface, ctx, &(self.text)(cell), rect, ctx.palette.text);
    }

    fn text(&self, cell: CellId) -> Option<String> {
        Some((self.text)(cell))
    }

    fn tooltip_text(&self, ctx: &GuiContext, cell: CellId, rect: Rect) -> Option<String> {
        if let Some(tooltip) = self.tooltip.as_ref().and_then(|tooltip| tooltip(cell)) {
            return Some(tooltip);
        }
        let text = (self.text)(cell);
        (!text.is_empty() && !self.fits(ctx, &text, rect)).then_some(text)
    }
}

/// Text view that shows a hint instead of the value for some cells.
///
/// Hints are drawn with `palette.hint` and measured like regular text.
///
/// # Examples
///
/// ```
/// use cellgrid::model::CellId;
/// use cellgrid::view::{View, ViewText, ViewTextOrHint};
///
/// let names = ["Ada", ""];
/// let view = ViewTextOrHint::new(
///     ViewText::new(move |cell: CellId| names[cell.row].to_string()),
///     move |cell| names[cell.row].is_empty(),
///     |_| "<name>".to_string(),
/// );
/// assert!(!view.is_hint(CellId::new(0, 0)));
/// assert!(view.is_hint(CellId::new(1, 0)));
/// ```
pub struct ViewTextOrHint {
    text: ViewText,
    is_hint: HintFn,
    hint_text: TextFn,
    hint_tooltip: Option<TooltipFn>,
}

impl ViewTextOrHint {
    /// Wrap `text`, showing `hint_text` wherever `is_hint` holds.
    pub fn new(
        text: ViewText,
        is_hint: impl Fn(CellId) -> bool + 'static,
        hint_text: impl Fn(CellId) -> String + 'static,
    ) -> Self {
        Self {
            text,
            is_hint: Box::new(is_hint),
            hint_text: Box::new(hint_text),
            hint_tooltip: None,
        }
    }

    /// Tooltips for hint cells.
    pub fn with_hint_tooltip(
        mut self,
        tooltip: impl Fn(CellId) -> Option<String> + 'static,
    ) -> Self {
        self.hint_tooltip = Some(Box::new(tooltip));
        self
    }

    /// True if `cell` shows the hint.
    pub fn is_hint(&self, cell: CellId) -> bool {
        (self.is_hint)(cell)
    }
}

impl View for ViewTextOrHint {
    fn size(&self, ctx: &GuiContext, cell: CellId) -> Size {
        if self.is_hint(cell) {
            self.text.measure(ctx, &(self.hint_text)(cell))
        } else {
            self.text.size(ctx, cell)
        }
    }

    fn draw(&self, surface: &mut dyn Surface, ctx: &GuiContext, cell: CellId, rect: Rect) {
        if self.is_hint(cell) {
            let hint = (self.hint_text)(cell);
            self.text.draw_str(surface, ctx, &hint, rect, ctx.palette.hint);
        } else {
            self.text.draw(surface, ctx, cell, rect);
        }
    }

    fn text(&self, cell: CellId) -> Option<String> {
        self.text.text(cell)
    }

    fn tooltip_text(&self, ctx: &GuiContext, cell: CellId, rect: Rect) -> Option<String> {
        if self.is_hint(cell) {
            self.hint_tooltip.as_ref().and_then(|tooltip| tooltip(cell))
        } else {
            self.text.tooltip_text(ctx, cell, rect)
        }
    }
}
