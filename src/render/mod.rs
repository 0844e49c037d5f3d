//! Rendering abstraction.
//!
//! - `surface`: the `Surface` trait views paint on, plus `GuiContext`
//! - `buffer`: `BufferSurface`, a ratatui `Buffer` rasteriser

pub mod buffer;
pub mod surface;

pub use buffer::{buffer_lines, BufferSurface};
pub use surface::{DrawCommand, GuiContext, Palette, RecordingSurface, Surface};
