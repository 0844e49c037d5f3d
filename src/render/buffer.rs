//! Rasterise pixel-space painting into a ratatui [`Buffer`].
//!
//! Each terminal cell stands for `cell_size` pixels. A pixel rect covers
//! every terminal cell its pixels fall into.

use super::surface::Surface;
use crate::model::{Rect, Size};
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

/// [`Surface`] backed by a terminal cell buffer.
pub struct BufferSurface<'a> {
    buffer: &'a mut Buffer,
    cell_size: Size,
    clip: Option<Rect>,
}

/// Terminal cell span `[first, last]` on both axes.
struct CellSpan {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
}

impl<'a> BufferSurface<'a> {
    /// Wrap `buffer`; `cell_size` is the pixel size of one terminal cell.
    ///
    /// # Panics
    /// Panics if `cell_size` is empty.
    pub fn new(buffer: &'a mut Buffer, cell_size: Size) -> Self {
        assert!(!cell_size.is_empty(), "cell size must be positive: {:?}", cell_size);
        Self {
            buffer,
            cell_size,
            clip: None,
        }
    }

    /// Pixel rect covered by the whole buffer.
    pub fn pixel_area(&self) -> Rect {
        let area = self.buffer.area;
        Rect::new(
            i32::from(area.x) * self.cell_size.width,
            i32::from(area.y) * self.cell_size.height,
            i32::from(area.width) * self.cell_size.width,
            i32::from(area.height) * self.cell_size.height,
        )
    }

    fn span(&self, rect: Rect) -> Option<CellSpan> {
        let rect = match self.clip {
            Some(clip) => rect.intersection(&clip),
            None => rect,
        }
        .intersection(&self.pixel_area());
        if rect.is_empty() {
            return None;
        }

        let to_cell = |px: i32, unit: i32| u16::try_from(px.div_euclid(unit)).ok();
        Some(CellSpan {
            x0: to_cell(rect.left, self.cell_size.width)?,
            y0: to_cell(rect.top, self.cell_size.height)?,
            x1: to_cell(rect.right, self.cell_size.width)?,
            y1: to_cell(rect.bottom, self.cell_size.height)?,
        })
    }
}

impl Surface for BufferSurface<'_> {
    fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(span) = self.span(rect) else {
            return;
        };
        for y in span.y0..=span.y1 {
            for x in span.x0..=span.x1 {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_bg(color);
                }
            }
        }
    }

    fn draw_text(&mut self, rect: Rect, text: &str, alignment: Alignment, color: Color) {
        let Some(span) = self.span(rect) else {
            return;
        };
        let available = usize::from(span.x1 - span.x0 + 1);
        let text_width = text.width().min(available);
        let slack = u16::try_from(available - text_width).unwrap_or(0);
        let x = match alignment {
            Alignment::Left => span.x0,
            Alignment::Center => span.x0 + slack / 2,
            Alignment::Right => span.x0 + slack,
        };
        let y = span.y0 + (span.y1 - span.y0) / 2;
        self.buffer
            .set_stringn(x, y, text, available, Style::default().fg(color));
    }
}

/// Plain text of a buffer, one string per row with trailing spaces trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    line.push_str(cell.symbol());
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}
