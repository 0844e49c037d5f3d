//! A grid, its viewport cache and its item factory in one place.
//!
//! [`ViewportCache`] borrows the grid and factory per call, which keeps it
//! independent of who owns them. `GridPane` is the owner a host usually
//! wants: it routes every edit through the right invalidation entry point.

use crate::cache::{CacheItem, CacheItemFactory, SchemaItemFactory, ViewportCache};
use crate::model::{CellId, CellRange, Point, Rect};
use crate::render::{GuiContext, Surface};
use crate::space::Grid;

/// Grid plus viewport cache plus factory.
///
/// # Examples
///
/// ```
/// use cellgrid::model::{CellId, Point, Rect};
/// use cellgrid::pane::GridPane;
/// use cellgrid::space::Grid;
///
/// let mut pane = GridPane::new(Grid::with_sizes(100, 100, 25, 100));
/// pane.set_window(Rect::new(0, 0, 250, 100));
/// pane.scroll_by(Point::new(0, 25));
///
/// let frame = pane.frame_bounds().unwrap();
/// assert_eq!(frame.start, CellId::new(1, 0));
/// ```
#[derive(Debug)]
pub struct GridPane<F = SchemaItemFactory> {
    grid: Grid,
    cache: ViewportCache,
    factory: F,
}

impl GridPane<SchemaItemFactory> {
    /// Pane drawing the grid's own schemas.
    pub fn new(grid: Grid) -> Self {
        Self::with_factory(grid, SchemaItemFactory)
    }
}

impl<F: CacheItemFactory> GridPane<F> {
    /// Pane building its cache items with `factory`.
    pub fn with_factory(grid: Grid, factory: F) -> Self {
        Self {
            grid,
            cache: ViewportCache::new(),
            factory,
        }
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The viewport cache, possibly not yet validated.
    pub fn cache(&self) -> &ViewportCache {
        &self.cache
    }

    /// Factory used for items entering the frame.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Edit the grid structure (line sizes, visibility, order, count).
    ///
    /// Every cached item is dropped afterwards since visible ids and cell
    /// rectangles may have moved.
    pub fn grid_mut<R>(&mut self, edit: impl FnOnce(&mut Grid) -> R) -> R {
        let result = edit(&mut self.grid);
        self.cache.clear();
        result
    }

    /// Notify that the data behind the views changed; geometry did not.
    pub fn set_data_changed(&mut self) {
        self.cache.invalidate_structure();
    }

    /// Edit the schema list and rebind cached items to it.
    pub fn set_schema_changed<R>(&mut self, edit: impl FnOnce(&mut Grid) -> R) -> R {
        let result = edit(&mut self.grid);
        self.cache.update_schema(&self.grid, &self.factory);
        result
    }

    /// Move or resize the window in host coordinates.
    pub fn set_window(&mut self, window: Rect) {
        self.cache.set_window(window);
    }

    /// Scroll so that space point `offset` sits at the window's corner.
    pub fn scroll_to(&mut self, offset: Point) {
        self.cache.set_scroll_offset(offset);
    }

    /// Scroll by a pixel delta.
    pub fn scroll_by(&mut self, delta: Point) {
        self.cache.scroll_by(delta);
    }

    /// Scroll the minimum amount that shows the whole visible cell.
    ///
    /// Cells larger than the window are aligned on their top-left corner.
    pub fn ensure_visible(&mut self, cell: CellId) {
        let rect = self.grid.cell_rect(cell);
        let window = self.cache.window();
        let mut offset = self.cache.scroll_offset();
        offset.x = scroll_axis(offset.x, window.width(), rect.left, rect.width());
        offset.y = scroll_axis(offset.y, window.height(), rect.top, rect.height());
        self.cache.set_scroll_offset(offset);
    }

    /// Visible cells of the current frame, `None` if nothing is visible.
    pub fn frame_bounds(&mut self) -> Option<CellRange> {
        self.cache.frame_bounds(&self.grid, &self.factory)
    }

    /// True if the visible cell is fully inside the frame.
    pub fn is_cell_fully_visible(&mut self, cell: CellId) -> bool {
        self.cache.is_cell_in_frame(&self.grid, &self.factory, cell, true)
    }

    /// Visible cell under a host point.
    pub fn cell_at(&self, point: Point) -> Option<CellId> {
        self.cache.cell_at_position(&self.grid, point)
    }

    /// Cached item under a host point.
    pub fn item_at(&mut self, point: Point) -> Option<&CacheItem> {
        self.cache.item_by_position(&self.grid, &self.factory, point)
    }

    /// Tooltip of the topmost view under a host point.
    pub fn tooltip_at(&mut self, ctx: &GuiContext, point: Point) -> Option<String> {
        self.cache.tooltip_at(&self.grid, &self.factory, ctx, point)
    }

    /// Validate and paint the frame.
    pub fn draw(&mut self, surface: &mut dyn Surface, ctx: &GuiContext) {
        self.cache.validate(&self.grid, &self.factory);
        self.cache.draw(surface, ctx);
    }
}

/// New scroll offset along one axis so that `[start, start + size)` is shown.
fn scroll_axis(offset: i32, window: i32, start: i32, size: i32) -> i32 {
    if start < offset || size >= window {
        start
    } else if start + size > offset + window {
        start + size - window
    } else {
        offset
    }
}
