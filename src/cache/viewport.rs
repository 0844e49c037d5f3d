//! Viewport cache: the materialised frame of visible cells.
//!
//! The cache keeps one [`CacheItem`] per visible cell of the current frame,
//! in a flat row-major vector. Every host-side change (window, scroll,
//! structure, schema) only marks the cache invalid. The next validating
//! query recomputes the frame from the grid's line metrics and then either
//! translates every item (frame bounds unchanged) or rebuilds the vector,
//! moving items that stay in view and creating the rest through the factory.
//!
//! Coordinates: *space* coordinates put pixel (0, 0) at the top-left corner
//! of the first visible cell; *host* coordinates are what the window rect
//! and item rects use. `host = space + origin` with
//! `origin = window.top_left - scroll_offset`.

use super::factory::CacheItemFactory;
use super::item::CacheItem;
use crate::model::{CellId, CellRange, Point, Rect, Size};
use crate::render::{GuiContext, Surface};
use crate::space::{Grid, Lines};
use std::mem;
use tracing::{debug, trace};

/// Sliding window of cached cells over a grid.
///
/// The cache never owns the grid or the factory; validating queries borrow
/// both for the duration of the call.
///
/// # Examples
///
/// ```
/// use cellgrid::cache::{SchemaItemFactory, ViewportCache};
/// use cellgrid::model::{CellId, CellRange, Point, Rect};
/// use cellgrid::space::Grid;
///
/// let grid = Grid::with_sizes(100, 100, 25, 100);
/// let mut cache = ViewportCache::new();
/// cache.set_window(Rect::new(0, 0, 250, 100));
///
/// let frame = cache.frame_bounds(&grid, &SchemaItemFactory);
/// assert_eq!(frame, Some(CellRange::new(CellId::new(0, 0), CellId::new(3, 2))));
///
/// cache.scroll_by(Point::new(0, 25));
/// let frame = cache.frame_bounds(&grid, &SchemaItemFactory);
/// assert_eq!(frame, Some(CellRange::new(CellId::new(1, 0), CellId::new(4, 2))));
/// ```
#[derive(Debug, Clone)]
pub struct ViewportCache {
    window: Rect,
    scroll_offset: Point,
    frame: Option<CellRange>,
    items: Vec<CacheItem>,
    stride: usize,
    scroll_delta: Point,
    size_delta: Size,
    invalid: bool,
    in_use: bool,
}

impl Default for ViewportCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportCache {
    /// Empty, invalid cache with an empty window.
    pub fn new() -> Self {
        Self {
            window: Rect::default(),
            scroll_offset: Point::ZERO,
            frame: None,
            items: Vec::new(),
            stride: 0,
            scroll_delta: Point::ZERO,
            size_delta: Size::ZERO,
            invalid: true,
            in_use: false,
        }
    }

    // ===== Host side =====

    /// The host rectangle the grid is drawn into.
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Space pixel shown at the window's top-left corner.
    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Offset from space to host coordinates.
    pub fn origin(&self) -> Point {
        self.window.top_left() - self.scroll_offset
    }

    /// Convert a host point to space coordinates.
    pub fn window_to_space(&self, point: Point) -> Point {
        point - self.origin()
    }

    /// True until the next validation.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Move or resize the window. Invalidates if it changed.
    pub fn set_window(&mut self, window: Rect) {
        if window == self.window {
            return;
        }
        let old_origin = self.origin();
        let old_size = self.window.size();
        self.window = window;
        self.scroll_delta += self.origin() - old_origin;
        self.size_delta += window.size() - old_size;
        self.invalid = true;
    }

    /// Scroll to an absolute space offset. Invalidates if it changed.
    pub fn set_scroll_offset(&mut self, offset: Point) {
        if offset == self.scroll_offset {
            return;
        }
        let old_origin = self.origin();
        self.scroll_offset = offset;
        self.scroll_delta += self.origin() - old_origin;
        self.invalid = true;
    }

    /// Scroll by a pixel delta.
    pub fn scroll_by(&mut self, delta: Point) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Mark the frame for recomputation on the next query.
    ///
    /// Kept items are only translated, so line size, visibility or order
    /// edits need [`clear`](Self::clear) instead.
    pub fn invalidate(&mut self) {
        self.invalid = true;
    }

    /// Drop every item and the frame.
    ///
    /// # Panics
    /// Panics if called while the cache is validating.
    pub fn clear(&mut self) {
        assert!(!self.in_use, "ViewportCache::clear() during validation");
        self.reset_frame();
        self.invalid = true;
    }

    /// Mark every item's content stale without touching the frame.
    pub fn invalidate_structure(&mut self) {
        for item in &mut self.items {
            item.invalidate_cache_view();
        }
        self.invalid = true;
    }

    /// Rebind every cached item to the grid's current schemas.
    pub fn update_schema<F>(&mut self, grid: &Grid, factory: &F)
    where
        F: CacheItemFactory + ?Sized,
    {
        self.invalidate_structure();
        for item in &mut self.items {
            factory.update_schema(grid, item);
        }
    }

    // ===== Validation =====

    /// Bring the frame and every item rectangle up to date.
    ///
    /// No-op when already valid.
    ///
    /// # Panics
    /// Panics if the grid's line metrics cannot resolve the window edges.
    pub fn validate<F>(&mut self, grid: &Grid, factory: &F)
    where
        F: CacheItemFactory + ?Sized,
    {
        if !self.invalid {
            return;
        }
        self.in_use = true;

        if grid.is_empty_visible() || self.window.is_empty() {
            self.reset_frame();
        } else {
            let bounds = self.compute_frame(grid);
            if self.frame == Some(bounds) {
                self.translate_items();
            } else {
                self.rebuild(grid, factory, bounds);
            }
        }

        self.scroll_delta = Point::ZERO;
        self.size_delta = Size::ZERO;
        self.invalid = false;
        self.in_use = false;
    }

    fn reset_frame(&mut self) {
        self.frame = None;
        self.items.clear();
        self.stride = 0;
        self.scroll_delta = Point::ZERO;
        self.size_delta = Size::ZERO;
    }

    fn compute_frame(&self, grid: &Grid) -> CellRange {
        let (first_row, last_row) =
            axis_span(grid.rows(), self.scroll_offset.y, self.window.height());
        let (first_column, last_column) =
            axis_span(grid.columns(), self.scroll_offset.x, self.window.width());
        CellRange::new(
            CellId::new(first_row, first_column),
            CellId::new(last_row, last_column),
        )
    }

    fn translate_items(&mut self) {
        let delta = self.scroll_delta;
        trace!(
            dx = delta.x,
            dy = delta.y,
            items = self.items.len(),
            "Translating cached items"
        );
        for item in &mut self.items {
            item.correct_rectangles(delta);
        }
    }

    fn rebuild<F>(&mut self, grid: &Grid, factory: &F, bounds: CellRange)
    where
        F: CacheItemFactory + ?Sized,
    {
        let old_frame = self.frame;
        let mut old_items: Vec<Option<CacheItem>> =
            mem::take(&mut self.items).into_iter().map(Some).collect();
        let delta = self.scroll_delta;
        let origin = self.origin();

        let mut reused = 0usize;
        let mut items = Vec::with_capacity(bounds.len());
        for cell in bounds.iter() {
            let kept = old_frame
                .and_then(|old| old.flat_index(cell))
                .and_then(|index| old_items.get_mut(index))
                .and_then(Option::take);
            let item = match kept {
                Some(mut item) => {
                    item.correct_rectangles(delta);
                    reused += 1;
                    item
                }
                None => {
                    let mut item = factory.create(grid, cell);
                    item.correct_rectangles(origin);
                    item
                }
            };
            items.push(item);
        }

        debug!(
            frame = %bounds,
            reused,
            created = items.len() - reused,
            dropped = old_items.iter().flatten().count(),
            "Rebuilt viewport cache"
        );

        self.items = items;
        self.stride = bounds.columns();
        self.frame = Some(bounds);
    }

    // ===== Queries =====

    /// Current frame, validating first. `None` when nothing is visible.
    pub fn frame_bounds<F>(&mut self, grid: &Grid, factory: &F) -> Option<CellRange>
    where
        F: CacheItemFactory + ?Sized,
    {
        self.validate(grid, factory);
        self.frame
    }

    /// True if the visible cell is in the frame.
    ///
    /// With `strict`, cells on the frame's outer rows and columns (possibly
    /// only partially shown) do not count.
    pub fn is_cell_in_frame<F>(
        &mut self,
        grid: &Grid,
        factory: &F,
        cell: CellId,
        strict: bool,
    ) -> bool
    where
        F: CacheItemFactory + ?Sized,
    {
        self.validate(grid, factory);
        self.frame.is_some_and(|frame| {
            if strict {
                frame.contains_strict(cell)
            } else {
                frame.contains(cell)
            }
        })
    }

    /// True if the absolute cell is visible and in the frame.
    pub fn is_absolute_cell_in_frame<F>(
        &mut self,
        grid: &Grid,
        factory: &F,
        absolute: CellId,
    ) -> bool
    where
        F: CacheItemFactory + ?Sized,
    {
        match grid.to_visible(absolute) {
            Some(cell) => self.is_cell_in_frame(grid, factory, cell, false),
            None => false,
        }
    }

    /// Visible cell under a host point, looked up in the whole grid.
    pub fn cell_at_position(&self, grid: &Grid, point: Point) -> Option<CellId> {
        if grid.is_empty_visible() {
            return None;
        }
        let space = self.window_to_space(point);
        Some(CellId::new(
            grid.rows().find_visible_id_by_pos(space.y)?,
            grid.columns().find_visible_id_by_pos(space.x)?,
        ))
    }

    /// Cached item of a visible cell.
    ///
    /// Does not validate: on a stale cache the result reflects the last frame.
    pub fn item(&self, cell: CellId) -> Option<&CacheItem> {
        self.index_of(cell).map(|index| &self.items[index])
    }

    /// Cached item under a host point, validating first.
    pub fn item_by_position<F>(
        &mut self,
        grid: &Grid,
        factory: &F,
        point: Point,
    ) -> Option<&CacheItem>
    where
        F: CacheItemFactory + ?Sized,
    {
        self.validate(grid, factory);
        let index = self.index_at(grid, point)?;
        Some(&self.items[index])
    }

    /// Tooltip of the topmost view under a host point.
    pub fn tooltip_at<F>(
        &mut self,
        grid: &Grid,
        factory: &F,
        ctx: &GuiContext,
        point: Point,
    ) -> Option<String>
    where
        F: CacheItemFactory + ?Sized,
    {
        self.validate(grid, factory);
        let index = self.index_at(grid, point)?;
        let item = &mut self.items[index];
        let (view, rect) = item.view_at(ctx, point)?;
        view.tooltip_text(ctx, item.absolute(), rect)
    }

    /// Items of the frame in row-major order.
    pub fn items(&self) -> impl Iterator<Item = &CacheItem> {
        self.items.iter()
    }

    /// Paint the frame, clipped to the window.
    ///
    /// # Panics
    /// Panics if the cache has not been validated since the last change.
    pub fn draw(&mut self, surface: &mut dyn Surface, ctx: &GuiContext) {
        assert!(!self.invalid, "ViewportCache::draw() on an invalid cache");
        let window = self.window;
        for item in &mut self.items {
            item.draw(surface, ctx, window);
        }
    }

    fn index_of(&self, cell: CellId) -> Option<usize> {
        let frame = self.frame?;
        let offset = cell.offset_from(frame.start)?;
        if offset.row >= frame.rows() || offset.column >= self.stride {
            return None;
        }
        Some(offset.row * self.stride + offset.column)
    }

    fn index_at(&self, grid: &Grid, point: Point) -> Option<usize> {
        let frame = self.frame?;
        let space = self.window_to_space(point);
        let row = grid
            .rows()
            .find_visible_id_by_pos_in(space.y, frame.start.row, frame.end.row)?;
        let column = grid
            .columns()
            .find_visible_id_by_pos_in(space.x, frame.start.column, frame.end.column)?;
        self.index_of(CellId::new(row, column))
    }
}

/// First and last visible line touched by `[offset, offset + extent)`.
///
/// Both edges are clamped to the content so an oversized or overscrolled
/// window still frames at least one line.
fn axis_span(lines: &Lines, offset: i32, extent: i32) -> (usize, usize) {
    let last_pixel = lines.total_extent() - 1;
    let leading = offset.clamp(0, last_pixel);
    let trailing = offset
        .saturating_add(extent)
        .saturating_sub(1)
        .clamp(leading, last_pixel);
    match (
        lines.find_visible_id_by_pos(leading),
        lines.find_visible_id_by_pos(trailing),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => panic!(
            "line metrics cannot resolve window span {}..={} (extent {})",
            leading,
            trailing,
            lines.total_extent()
        ),
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
