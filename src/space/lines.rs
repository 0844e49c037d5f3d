//! Line metrics for one grid axis.
//!
//! `Lines` maps between absolute line ids (model order), visible line ids
//! (display order, hidden lines removed) and pixel positions. The grid owns
//! one instance per axis; the viewport cache only reads it.

use super::extent_index::ExtentIndex;

/// Default extent for newly added lines, in pixels.
pub const DEFAULT_LINE_SIZE: u32 = 25;

/// Sizes, visibility and display order of the lines along one axis.
///
/// # Invariants
/// - `sizes.len() == visible.len() == count()`
/// - `order` is a permutation of `0..count()` (display order of absolute ids)
/// - `index` holds the sizes of visible lines in display order
/// - `abs_to_visible[a] == Some(v)` iff `visible_to_abs[v] == a`
#[derive(Debug, Clone)]
pub struct Lines {
    sizes: Vec<u32>,
    visible: Vec<bool>,
    order: Vec<usize>,
    visible_to_abs: Vec<usize>,
    abs_to_visible: Vec<Option<usize>>,
    index: ExtentIndex,
    default_size: u32,
}

impl Default for Lines {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Lines {
    /// Create `count` visible lines of [`DEFAULT_LINE_SIZE`] in natural order.
    pub fn new(count: usize) -> Self {
        Self::with_size(count, DEFAULT_LINE_SIZE)
    }

    /// Create `count` visible lines of `size` pixels in natural order.
    pub fn with_size(count: usize, size: u32) -> Self {
        let mut lines = Self {
            sizes: vec![size; count],
            visible: vec![true; count],
            order: (0..count).collect(),
            visible_to_abs: Vec::new(),
            abs_to_visible: Vec::new(),
            index: ExtentIndex::new(),
            default_size: size,
        };
        lines.rebuild();
        lines
    }

    /// Total number of lines, hidden ones included.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of visible lines.
    pub fn visible_count(&self) -> usize {
        self.visible_to_abs.len()
    }

    /// True if no line is visible or all visible lines have zero size.
    pub fn is_empty_visible(&self) -> bool {
        self.total_extent() == 0
    }

    /// Sum of the sizes of all visible lines.
    pub fn total_extent(&self) -> i32 {
        to_pixels(self.index.total())
    }

    /// Size of an absolute line.
    ///
    /// # Panics
    /// Panics if `absolute >= count()`.
    pub fn line_size(&self, absolute: usize) -> u32 {
        self.sizes[absolute]
    }

    /// Size of a visible line.
    ///
    /// # Panics
    /// Panics if `visible >= visible_count()`.
    pub fn visible_line_size(&self, visible: usize) -> u32 {
        self.index.extent(visible)
    }

    /// True if the absolute line is shown.
    pub fn is_line_visible(&self, absolute: usize) -> bool {
        self.visible[absolute]
    }

    /// Leading pixel of a visible line.
    ///
    /// # Panics
    /// Panics if `visible >= visible_count()`.
    pub fn position(&self, visible: usize) -> i32 {
        to_pixels(self.index.start(visible))
    }

    /// Visible line covering pixel `pos`, or `None` outside the content.
    pub fn find_visible_id_by_pos(&self, pos: i32) -> Option<usize> {
        self.index.find(i64::from(pos))
    }

    /// Visible line covering pixel `pos`, searching only `low..=high`.
    ///
    /// Returns `None` if `pos` is not covered by those lines.
    pub fn find_visible_id_by_pos_in(&self, pos: i32, low: usize, high: usize) -> Option<usize> {
        self.index.find_in(i64::from(pos), low, high)
    }

    /// Map an absolute line to its visible id (`None` if hidden or out of range).
    pub fn to_visible(&self, absolute: usize) -> Option<usize> {
        self.abs_to_visible.get(absolute).copied().flatten()
    }

    /// Map a visible line to its absolute id.
    pub fn to_absolute(&self, visible: usize) -> Option<usize> {
        self.visible_to_abs.get(visible).copied()
    }

    /// Resize the axis. New lines get the default size and are appended at
    /// the end of the display order; removed lines drop out of the order.
    pub fn set_count(&mut self, count: usize) {
        let old = self.count();
        self.sizes.resize(count, self.default_size);
        self.visible.resize(count, true);
        if count < old {
            self.order.retain(|&abs| abs < count);
        } else {
            self.order.extend(old..count);
        }
        self.rebuild();
    }

    /// Set the size of one absolute line.
    ///
    /// # Panics
    /// Panics if `absolute >= count()`.
    pub fn set_line_size(&mut self, absolute: usize, size: u32) {
        assert!(
            absolute < self.count(),
            "line {} out of bounds (count: {})",
            absolute,
            self.count()
        );
        self.sizes[absolute] = size;
        if let Some(visible) = self.to_visible(absolute) {
            self.index.set(visible, size);
        }
    }

    /// Set every line (and future lines) to `size`.
    pub fn set_line_size_all(&mut self, size: u32) {
        self.default_size = size;
        self.sizes.iter_mut().for_each(|s| *s = size);
        self.rebuild();
    }

    /// Show or hide an absolute line.
    ///
    /// # Panics
    /// Panics if `absolute >= count()`.
    pub fn set_line_visible(&mut self, absolute: usize, visible: bool) {
        assert!(
            absolute < self.count(),
            "line {} out of bounds (count: {})",
            absolute,
            self.count()
        );
        if self.visible[absolute] != visible {
            self.visible[absolute] = visible;
            self.rebuild();
        }
    }

    /// Replace the display order.
    ///
    /// # Panics
    /// Panics if `order` is not a permutation of `0..count()`.
    pub fn set_order(&mut self, order: Vec<usize>) {
        let mut seen = vec![false; self.count()];
        assert_eq!(order.len(), self.count(), "order must list every line");
        for &abs in &order {
            assert!(
                abs < self.count() && !seen[abs],
                "order is not a permutation (bad entry {})",
                abs
            );
            seen[abs] = true;
        }
        self.order = order;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.visible_to_abs = self
            .order
            .iter()
            .copied()
            .filter(|&abs| self.visible[abs])
            .collect();
        self.abs_to_visible = vec![None; self.count()];
        for (visible, &abs) in self.visible_to_abs.iter().enumerate() {
            self.abs_to_visible[abs] = Some(visible);
        }
        self.index = ExtentIndex::from_extents(self.visible_to_abs.iter().map(|&abs| self.sizes[abs]));
    }
}

fn to_pixels(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
