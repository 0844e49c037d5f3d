//! Grid space: line metrics, cell geometry and schema bindings.
//!
//! # Module Structure
//!
//! - `extent_index`: `ExtentIndex` - Fenwick tree over line extents
//! - `lines`: `Lines` - one axis (sizes, visibility, display order)
//! - `grid`: `Grid` - both axes plus the schema list
//! - `range`: `Range` - sets of cells
//! - `schema`: `Schema` - a view bound to a range

pub mod extent_index;
pub mod grid;
pub mod lines;
pub mod range;
pub mod schema;

pub use extent_index::ExtentIndex;
pub use grid::Grid;
pub use lines::{Lines, DEFAULT_LINE_SIZE};
pub use range::Range;
pub use schema::Schema;
