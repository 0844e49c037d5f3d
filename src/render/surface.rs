//! Painting abstraction consumed by views.
//!
//! The grid never talks to a real toolkit: views paint through the
//! [`Surface`] trait in pixel coordinates and the host decides what a pixel
//! is. [`RecordingSurface`] keeps the commands for inspection.

use crate::model::Rect;
use ratatui::layout::Alignment;
use ratatui::style::Color;

/// Colours used by the built-in views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Cell background.
    pub background: Color,
    /// Text foreground.
    pub text: Color,
    /// Background of selected cells.
    pub selection: Color,
    /// Background of the active (focused) cell.
    pub active: Color,
    /// Foreground of hint text shown in place of a value.
    pub hint: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            text: Color::White,
            selection: Color::Blue,
            active: Color::LightBlue,
            hint: Color::DarkGray,
        }
    }
}

/// Drawing context shared by all views during one paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiContext {
    /// Colours.
    pub palette: Palette,
    /// Pixel width of one text column (one unit of unicode display width).
    pub char_width: i32,
    /// Pixel height of one line of text.
    pub line_height: i32,
}

impl Default for GuiContext {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            char_width: 8,
            line_height: 16,
        }
    }
}

/// Something views can paint on.
pub trait Surface {
    /// Restrict subsequent painting to `clip` (`None` removes the clip).
    fn set_clip(&mut self, clip: Option<Rect>);

    /// Fill `rect` with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text inside `rect`, vertically centred.
    fn draw_text(&mut self, rect: Rect, text: &str, alignment: Alignment, color: Color);
}

/// A painting command captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// `fill_rect` call, rect already clipped.
    Fill {
        /// Filled area.
        rect: Rect,
        /// Fill colour.
        color: Color,
    },
    /// `draw_text` call, rect already clipped.
    Text {
        /// Text area.
        rect: Rect,
        /// The text.
        text: String,
        /// Horizontal alignment.
        alignment: Alignment,
        /// Text colour.
        color: Color,
    },
}

impl DrawCommand {
    /// Area the command paints.
    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::Fill { rect, .. } | DrawCommand::Text { rect, .. } => *rect,
        }
    }
}

/// Surface that records clipped draw commands instead of painting.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    clip: Option<Rect>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text strings drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Fill { .. } => None,
            })
            .collect()
    }

    /// Forget recorded commands (the clip is kept).
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn clipped(&self, rect: Rect) -> Option<Rect> {
        let rect = match self.clip {
            Some(clip) => rect.intersection(&clip),
            None => rect,
        };
        (!rect.is_empty()).then_some(rect)
    }
}

impl Surface for RecordingSurface {
    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(rect) = self.clipped(rect) {
            self.commands.push(DrawCommand::Fill { rect, color });
        }
    }

    fn draw_text(&mut self, rect: Rect, text: &str, alignment: Alignment, color: Color) {
        if let Some(rect) = self.clipped(rect) {
            self.commands.push(DrawCommand::Text {
                rect,
                text: text.to_string(),
                alignment,
                color,
            });
        }
    }
}
