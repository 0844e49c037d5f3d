//! Domain model types (pure).
//!
//! Cell coordinates, pixel geometry and the application error taxonomy.

pub mod error;
pub mod geometry;
pub mod identifiers;

// Re-export for convenience
pub use error::AppError;
pub use geometry::{Point, Rect, Size};
pub use identifiers::{CellId, CellRange};
