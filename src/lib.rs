//! cellgrid
//!
//! Core of a spreadsheet-like grid widget: per-axis line metrics, views
//! composed per cell through layouts, selection, and a viewport cache that
//! keeps the render state of the visible cells across scrolls and resizes.
//!
//! The crate paints through the [`render::Surface`] trait and leaves the
//! event loop to its host. The `cellgrid` binary renders a single frame
//! into a terminal buffer.
//!
//! # Module Structure
//!
//! - [`model`]: cell ids, pixel geometry, errors
//! - [`space`]: line metrics, the grid, ranges and schemas
//! - [`view`]: the `View` trait, layouts and built-in views
//! - [`render`]: painting abstraction and its ratatui backend
//! - [`cache`]: viewport cache, cache items and their factory
//! - [`pane`]: grid, cache and factory bundled for a host
//! - [`config`], [`logging`]: application boundary

pub mod cache;
pub mod config;
pub mod logging;
pub mod model;
pub mod pane;
pub mod render;
pub mod space;
pub mod view;
