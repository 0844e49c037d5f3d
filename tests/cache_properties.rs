//! Property-based tests for the viewport cache.
//!
//! Frames are checked against a linear scan of the line sizes, and item
//! rectangles after arbitrary scroll sequences are checked against a cache
//! built from scratch at the final position.

use cellgrid::cache::{CacheItem, CacheItemFactory, SchemaItemFactory, ViewportCache};
use cellgrid::model::{CellId, CellRange, Point, Rect};
use cellgrid::space::Grid;
use proptest::prelude::*;
use std::cell::Cell;

// ===== Test Helpers =====

#[derive(Default)]
struct CountingFactory {
    created: Cell<usize>,
}

impl CacheItemFactory for CountingFactory {
    fn create(&self, grid: &Grid, cell: CellId) -> CacheItem {
        self.created.set(self.created.get() + 1);
        SchemaItemFactory.create(grid, cell)
    }

    fn update_schema(&self, grid: &Grid, item: &mut CacheItem) {
        SchemaItemFactory.update_schema(grid, item)
    }
}

fn grid_from(row_sizes: &[u32], column_sizes: &[u32]) -> Grid {
    let mut grid = Grid::new(row_sizes.len(), column_sizes.len());
    for (row, &size) in row_sizes.iter().enumerate() {
        grid.rows_mut().set_line_size(row, size);
    }
    for (column, &size) in column_sizes.iter().enumerate() {
        grid.columns_mut().set_line_size(column, size);
    }
    grid
}

/// Lines touched by `[offset, offset + extent)`, clamped to the content.
fn expected_span(sizes: &[u32], offset: i32, extent: i32) -> (usize, usize) {
    let total: i32 = sizes.iter().map(|&s| s as i32).sum();
    let leading = offset.clamp(0, total - 1);
    let trailing = (offset + extent - 1).clamp(leading, total - 1);
    let line_at = |pos: i32| {
        let mut start = 0;
        for (index, &size) in sizes.iter().enumerate() {
            let end = start + size as i32;
            if pos >= start && pos < end {
                return index;
            }
            start = end;
        }
        unreachable!("position {} outside content", pos)
    };
    (line_at(leading), line_at(trailing))
}

fn rects(cache: &ViewportCache) -> Vec<(CellId, Rect)> {
    cache.items().map(|item| (item.id(), item.rect())).collect()
}

// ===== Arbitrary Strategies =====

fn arb_sizes() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=60, 1..30)
}

fn arb_window() -> impl Strategy<Value = Rect> {
    (-50i32..50, -50i32..50, 1i32..400, 1i32..400)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

fn arb_scroll() -> impl Strategy<Value = Point> {
    (0i32..1500, 0i32..1500).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_delta() -> impl Strategy<Value = Point> {
    (-80i32..80, -80i32..80).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    /// The frame spans exactly the lines the window touches.
    #[test]
    fn prop_frame_matches_linear_scan(
        row_sizes in arb_sizes(),
        column_sizes in arb_sizes(),
        window in arb_window(),
        scroll in arb_scroll(),
    ) {
        let grid = grid_from(&row_sizes, &column_sizes);
        let mut cache = ViewportCache::new();
        cache.set_window(window);
        cache.set_scroll_offset(scroll);

        let (first_row, last_row) = expected_span(&row_sizes, scroll.y, window.height());
        let (first_column, last_column) = expected_span(&column_sizes, scroll.x, window.width());
        let expected = CellRange::new(
            CellId::new(first_row, first_column),
            CellId::new(last_row, last_column),
        );

        prop_assert_eq!(cache.frame_bounds(&grid, &SchemaItemFactory), Some(expected));
        prop_assert_eq!(cache.items().count(), expected.len());
    }

    /// Every item sits at its space rectangle shifted by the origin.
    #[test]
    fn prop_item_rects_follow_origin(
        row_sizes in arb_sizes(),
        column_sizes in arb_sizes(),
        window in arb_window(),
        scroll in arb_scroll(),
    ) {
        let grid = grid_from(&row_sizes, &column_sizes);
        let mut cache = ViewportCache::new();
        cache.set_window(window);
        cache.set_scroll_offset(scroll);
        cache.validate(&grid, &SchemaItemFactory);

        let origin = cache.origin();
        for item in cache.items() {
            prop_assert_eq!(item.rect(), grid.cell_rect(item.id()).translated(origin));
        }
    }

    /// Incremental scrolling ends in the same state as a fresh cache, and
    /// only cells entering the frame are created.
    #[test]
    fn prop_incremental_scroll_matches_rebuild(
        row_sizes in arb_sizes(),
        column_sizes in arb_sizes(),
        window in arb_window(),
        deltas in prop::collection::vec(arb_delta(), 1..20),
    ) {
        let grid = grid_from(&row_sizes, &column_sizes);
        let factory = CountingFactory::default();
        let mut cache = ViewportCache::new();
        cache.set_window(window);

        for delta in deltas {
            let before = cache.frame_bounds(&grid, &factory);
            let created_before = factory.created.get();

            let offset = cache.scroll_offset() + delta;
            cache.set_scroll_offset(Point::new(offset.x.max(0), offset.y.max(0)));
            let after = cache.frame_bounds(&grid, &factory).expect("grid is not empty");

            let kept = before
                .and_then(|before| before.intersection(&after))
                .map_or(0, |overlap| overlap.len());
            prop_assert_eq!(factory.created.get() - created_before, after.len() - kept);
        }

        let mut fresh = ViewportCache::new();
        fresh.set_window(window);
        fresh.set_scroll_offset(cache.scroll_offset());
        fresh.validate(&grid, &SchemaItemFactory);

        prop_assert_eq!(rects(&cache), rects(&fresh));
    }

    /// Point lookups agree with the frame they were found in.
    #[test]
    fn prop_item_by_position_agrees_with_cell_at_position(
        row_sizes in arb_sizes(),
        column_sizes in arb_sizes(),
        window in arb_window(),
        scroll in arb_scroll(),
        within in (0i32..400, 0i32..400),
    ) {
        let grid = grid_from(&row_sizes, &column_sizes);
        let mut cache = ViewportCache::new();
        cache.set_window(window);
        cache.set_scroll_offset(scroll);

        let point = Point::new(window.left + within.0, window.top + within.1);
        let cell = cache.cell_at_position(&grid, point);
        let item = cache.item_by_position(&grid, &SchemaItemFactory, point).map(CacheItem::id);

        if let Some(id) = item {
            prop_assert_eq!(Some(id), cell);
        }
        if let Some(cell) = cell {
            let in_frame = cache.is_cell_in_frame(&grid, &SchemaItemFactory, cell, false);
            prop_assert_eq!(in_frame, cache.item(cell).is_some());
        }
    }
}
