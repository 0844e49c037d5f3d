//! Creation and schema rebinding of cache items.

use super::item::{CacheItem, CacheView};
use crate::model::CellId;
use crate::space::Grid;
use std::rc::Rc;

/// Builds cache items for cells entering the viewport.
///
/// Items are created with their rectangle in space coordinates; the cache
/// moves them into host coordinates.
pub trait CacheItemFactory {
    /// Create the item for visible cell `cell`.
    fn create(&self, grid: &Grid, cell: CellId) -> CacheItem;

    /// Rebind an existing item to the grid's current schemas.
    fn update_schema(&self, grid: &Grid, item: &mut CacheItem);
}

/// Factory that binds every schema of the grid whose range covers the cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaItemFactory;

impl SchemaItemFactory {
    fn bind(grid: &Grid, absolute: CellId) -> Vec<CacheView> {
        grid.schemas_for(absolute)
            .map(|schema| CacheView::new(Rc::clone(&schema.view), schema.layout))
            .collect()
    }
}

impl CacheItemFactory for SchemaItemFactory {
    fn create(&self, grid: &Grid, cell: CellId) -> CacheItem {
        let Some(absolute) = grid.to_absolute(cell) else {
            panic!("visible cell {} is outside the grid", cell);
        };
        CacheItem::new(cell, absolute, grid.cell_rect(cell), Self::bind(grid, absolute))
    }

    fn update_schema(&self, grid: &Grid, item: &mut CacheItem) {
        item.set_views(Self::bind(grid, item.absolute()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;
    use crate::space::Range;
    use crate::view::{Layout, ViewFill};

    #[test]
    fn create_binds_matching_schemas() {
        let mut grid = Grid::with_sizes(10, 10, 25, 100);
        grid.add_schema(Range::Row(3), Rc::new(ViewFill::background()), Layout::background());
        grid.rows_mut().set_line_visible(0, false);

        let item = SchemaItemFactory.create(&grid, CellId::new(2, 1));

        assert_eq!(item.id(), CellId::new(2, 1));
        assert_eq!(item.absolute(), CellId::new(3, 1));
        assert_eq!(item.rect(), Rect::new(100, 50, 100, 25));
        assert_eq!(item.views().len(), 1);
        assert!(!item.is_content_valid());
    }

    #[test]
    fn update_schema_rebinds() {
        let mut grid = Grid::with_sizes(2, 2, 25, 100);
        let mut item = SchemaItemFactory.create(&grid, CellId::new(0, 0));
        assert!(item.views().is_empty());

        grid.add_schema(Range::All, Rc::new(ViewFill::background()), Layout::background());
        SchemaItemFactory.update_schema(&grid, &mut item);

        assert_eq!(item.views().len(), 1);
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn create_outside_grid_panics() {
        let grid = Grid::new(1, 1);
        SchemaItemFactory.create(&grid, CellId::new(5, 5));
    }
}
