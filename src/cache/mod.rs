//! Viewport cache and the items it holds.
//!
//! # Module Structure
//!
//! - `item`: `CacheItem` - render record of one visible cell
//! - `factory`: `CacheItemFactory` - how items are created and rebound
//! - `viewport`: `ViewportCache` - the frame of items over the grid

pub mod factory;
pub mod item;
pub mod viewport;

pub use factory::{CacheItemFactory, SchemaItemFactory};
pub use item::{CacheItem, CacheView};
pub use viewport::ViewportCache;
