//! Snapshot test for a frame rendered into a ratatui buffer.
//!
//! Uses insta to pin the text output of the full pipeline: grid schemas,
//! viewport cache, layouts, views and the buffer surface.

use cellgrid::model::{CellId, Point, Rect, Size};
use cellgrid::pane::GridPane;
use cellgrid::render::{buffer_lines, BufferSurface, GuiContext};
use cellgrid::space::{Grid, Range};
use cellgrid::view::{Layout, Selection, ViewFill, ViewSelection, ViewText};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use std::rc::Rc;

const CELL: Size = Size::new(8, 16);

fn ctx() -> GuiContext {
    GuiContext {
        char_width: CELL.width,
        line_height: CELL.height,
        ..GuiContext::default()
    }
}

fn demo_pane() -> GridPane {
    let selection = Selection::shared();
    selection.borrow_mut().set_selection(Range::Column(1));
    selection.borrow_mut().set_active(Some(CellId::new(2, 0)));

    let mut grid = Grid::with_sizes(4, 3, 16, 96);
    grid.add_schema(Range::All, Rc::new(ViewFill::background()), Layout::background());
    grid.add_schema(Range::All, Rc::new(ViewSelection::new(selection)), Layout::background());
    grid.add_schema(
        Range::All,
        Rc::new(ViewText::new(|cell| format!("Item {}", cell))),
        Layout::client(),
    );
    GridPane::new(grid)
}

fn render(pane: &mut GridPane, width: u16, height: u16) -> Buffer {
    let mut buffer = Buffer::empty(CellRect::new(0, 0, width, height));
    pane.set_window(Rect::new(
        0,
        0,
        i32::from(width) * CELL.width,
        i32::from(height) * CELL.height,
    ));
    {
        let mut surface = BufferSurface::new(&mut buffer, CELL);
        pane.draw(&mut surface, &ctx());
    }
    buffer
}

#[test]
fn snapshot_scrolled_frame() {
    let mut pane = demo_pane();
    pane.scroll_to(Point::new(0, 16));

    let buffer = render(&mut pane, 30, 3);
    let output = buffer_lines(&buffer).join("\n");

    insta::assert_snapshot!("scrolled_frame", output);
}

#[test]
fn selection_and_active_cell_backgrounds() {
    let mut pane = demo_pane();
    pane.scroll_to(Point::new(0, 16));
    let palette = ctx().palette;

    let buffer = render(&mut pane, 30, 3);

    // terminal row 0 is grid row 1
    assert_eq!(buffer.cell((12, 0)).map(|c| c.bg), Some(palette.selection));
    assert_eq!(buffer.cell((23, 2)).map(|c| c.bg), Some(palette.selection));
    assert_eq!(buffer.cell((0, 1)).map(|c| c.bg), Some(palette.active));
    assert_eq!(buffer.cell((0, 0)).map(|c| c.bg), Some(palette.background));
}
