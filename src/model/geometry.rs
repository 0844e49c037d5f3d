//! Pixel geometry primitives.
//!
//! All coordinates are `i32` pixels. `Rect` uses inclusive edges: a rect
//! with `left == right` is one pixel wide. Layout arithmetic relies on this
//! (`view_rect.right + 1` is the first pixel after a view).
//!
//! Point and size arithmetic saturates at the `i32` bounds, so extreme
//! scroll offsets clamp instead of overflowing.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point (or a translation delta) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin / zero delta.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if both components are zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

/// A size (or a size delta) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is not positive.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_add(rhs.width),
            self.height.saturating_add(rhs.height),
        )
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) {
        *self = *self + rhs;
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_sub(rhs.width),
            self.height.saturating_sub(rhs.height),
        )
    }
}

/// Axis-aligned rectangle with inclusive edges.
///
/// # Invariants
/// - Non-empty rects satisfy `left <= right` and `top <= bottom`
/// - `Rect::default()` is empty (`right = left - 1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost pixel column (inclusive).
    pub left: i32,
    /// Topmost pixel row (inclusive).
    pub top: i32,
    /// Rightmost pixel column (inclusive).
    pub right: i32,
    /// Bottommost pixel row (inclusive).
    pub bottom: i32,
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            right: -1,
            bottom: -1,
        }
    }
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width - 1,
            bottom: y + height - 1,
        }
    }

    /// Create a rect from a corner point and a size.
    pub const fn from_point_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Width in pixels (`right - left + 1`).
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left).saturating_add(1)
    }

    /// Height in pixels (`bottom - top + 1`).
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top).saturating_add(1)
    }

    /// Size of the rect.
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Bottom-right corner (inclusive).
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// True if the rect covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Move the left edge, keeping the right edge.
    pub fn set_left(&mut self, left: i32) {
        self.left = left;
    }

    /// Move the right edge, keeping the left edge.
    pub fn set_right(&mut self, right: i32) {
        self.right = right;
    }

    /// Move the top edge, keeping the bottom edge.
    pub fn set_top(&mut self, top: i32) {
        self.top = top;
    }

    /// Move the bottom edge, keeping the top edge.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.bottom = bottom;
    }

    /// Shift the rect by `delta` in place.
    pub fn translate(&mut self, delta: Point) {
        self.left = self.left.saturating_add(delta.x);
        self.right = self.right.saturating_add(delta.x);
        self.top = self.top.saturating_add(delta.y);
        self.bottom = self.bottom.saturating_add(delta.y);
    }

    /// Return a copy shifted by `delta`.
    pub fn translated(mut self, delta: Point) -> Self {
        self.translate(delta);
        self
    }

    /// True if `point` lies inside the rect (edges included).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// True if the two rects share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Overlapping area of two rects (empty if they do not overlap).
    pub fn intersection(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }
}
