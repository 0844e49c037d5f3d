//! The grid: two axes of lines plus the schema list.

use super::{Lines, Range, Schema};
use crate::model::{CellId, Rect, Size};
use crate::render::GuiContext;
use crate::view::{Layout, View};
use std::rc::Rc;

/// Rows, columns and the views bound to their cells.
///
/// Cell geometry is expressed in *space* coordinates: pixel (0, 0) is the
/// top-left corner of the first visible cell. The viewport cache maps space
/// coordinates to host coordinates; the grid never knows about the window.
///
/// # Examples
///
/// ```
/// use cellgrid::model::{CellId, Rect};
/// use cellgrid::space::Grid;
///
/// let grid = Grid::with_sizes(100, 100, 25, 100);
/// assert_eq!(grid.cell_rect(CellId::new(2, 1)), Rect::new(100, 50, 100, 25));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Lines,
    columns: Lines,
    schemas: Vec<Schema>,
}

impl Grid {
    /// Grid of `rows` x `columns` cells with default line sizes.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: Lines::new(rows),
            columns: Lines::new(columns),
            schemas: Vec::new(),
        }
    }

    /// Grid with uniform row height and column width.
    pub fn with_sizes(rows: usize, columns: usize, row_height: u32, column_width: u32) -> Self {
        Self {
            rows: Lines::with_size(rows, row_height),
            columns: Lines::with_size(columns, column_width),
            schemas: Vec::new(),
        }
    }

    /// Row metrics.
    pub fn rows(&self) -> &Lines {
        &self.rows
    }

    /// Column metrics.
    pub fn columns(&self) -> &Lines {
        &self.columns
    }

    /// Mutable row metrics.
    ///
    /// Caches over this grid need [`ViewportCache::clear`](crate::cache::ViewportCache::clear)
    /// after structural edits.
    pub fn rows_mut(&mut self) -> &mut Lines {
        &mut self.rows
    }

    /// Mutable column metrics.
    pub fn columns_mut(&mut self) -> &mut Lines {
        &mut self.columns
    }

    /// Change the number of rows and columns.
    pub fn set_dimensions(&mut self, rows: usize, columns: usize) {
        self.rows.set_count(rows);
        self.columns.set_count(columns);
    }

    /// True if nothing would be drawn: no visible extent on either axis.
    pub fn is_empty_visible(&self) -> bool {
        self.rows.is_empty_visible() || self.columns.is_empty_visible()
    }

    /// Total size of the visible content in pixels.
    pub fn total_size(&self) -> Size {
        Size::new(self.columns.total_extent(), self.rows.total_extent())
    }

    /// Map an absolute cell to its visible cell.
    ///
    /// Returns `None` if the row or column is hidden or out of range.
    pub fn to_visible(&self, absolute: CellId) -> Option<CellId> {
        Some(CellId::new(
            self.rows.to_visible(absolute.row)?,
            self.columns.to_visible(absolute.column)?,
        ))
    }

    /// Map a visible cell to its absolute cell.
    pub fn to_absolute(&self, visible: CellId) -> Option<CellId> {
        Some(CellId::new(
            self.rows.to_absolute(visible.row)?,
            self.columns.to_absolute(visible.column)?,
        ))
    }

    /// Space rectangle of a visible cell.
    ///
    /// # Panics
    /// Panics if `visible` is outside the visible grid.
    pub fn cell_rect(&self, visible: CellId) -> Rect {
        Rect::new(
            self.columns.position(visible.column),
            self.rows.position(visible.row),
            to_pixels(self.columns.visible_line_size(visible.column)),
            to_pixels(self.rows.visible_line_size(visible.row)),
        )
    }

    /// Bind `view` with `layout` to every cell of `range`.
    pub fn add_schema(&mut self, range: Range, view: Rc<dyn View>, layout: Layout) {
        self.schemas.push(Schema::new(range, view, layout));
    }

    /// Remove every binding.
    pub fn clear_schemas(&mut self) {
        self.schemas.clear();
    }

    /// All schemas, in drawing order.
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// Bindings that apply to an absolute cell, in draw order.
    pub fn schemas_for(&self, absolute: CellId) -> impl Iterator<Item = &Schema> {
        self.schemas.iter().filter(move |schema| schema.applies_to(absolute))
    }

    /// Natural size of an absolute cell, negotiated over its views.
    pub fn size_hint(&self, absolute: CellId, ctx: &GuiContext) -> Size {
        self.schemas_for(absolute).fold(Size::ZERO, |mut size, schema| {
            schema
                .layout
                .expand_size(schema.view.size(ctx, absolute), &mut size);
            size
        })
    }

    /// Resize an absolute column to the widest hint among its visible rows.
    ///
    /// Leaves the column untouched if no cell asks for any width.
    pub fn fit_column(&mut self, column: usize, ctx: &GuiContext) {
        let widest = (0..self.rows.visible_count())
            .filter_map(|visible| self.rows.to_absolute(visible))
            .map(|row| self.size_hint(CellId::new(row, column), ctx).width)
            .max()
            .unwrap_or(0);
        if let Ok(width) = u32::try_from(widest) {
            if width > 0 {
                self.columns.set_line_size(column, width);
            }
        }
    }

    /// Resize an absolute row to the tallest hint among its visible columns.
    ///
    /// Leaves the row untouched if no cell asks for any height.
    pub fn fit_row(&mut self, row: usize, ctx: &GuiContext) {
        let tallest = (0..self.columns.visible_count())
            .filter_map(|visible| self.columns.to_absolute(visible))
            .map(|column| self.size_hint(CellId::new(row, column), ctx).height)
            .max()
            .unwrap_or(0);
        if let Ok(height) = u32::try_from(tallest) {
            if height > 0 {
                self.rows.set_line_size(row, height);
            }
        }
    }
}

fn to_pixels(size: u32) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX)
}
