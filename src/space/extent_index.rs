//! ExtentIndex - O(log n) prefix sums and position lookup via Fenwick tree
//!
//! Stores the pixel extent of each line along one axis and answers
//! "where does line i start" and "which line covers pixel p".
//!
//! # Complexity
//!
//! - `set`: O(log n)
//! - `start` / `end`: O(log n)
//! - `find` / `find_in`: O(log² n)
//! - `extent`: O(1)
//! - `total`: O(log n)
//! - rebuild (`from_extents`): O(n log n)

/// Fenwick-backed cumulative extents for a sequence of lines.
#[derive(Debug, Clone, Default)]
pub struct ExtentIndex {
    /// Fenwick tree backing storage, sized exactly to `extents.len()`.
    tree: Vec<i64>,
    /// Plain extents for O(1) reads.
    extents: Vec<u32>,
}

impl ExtentIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over the given extents.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cellgrid::space::extent_index::ExtentIndex;
    /// let index = ExtentIndex::from_extents([10, 20, 15]);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.total(), 45);
    /// ```
    pub fn from_extents(extents: impl IntoIterator<Item = u32>) -> Self {
        let extents: Vec<u32> = extents.into_iter().collect();
        let mut tree = vec![0i64; extents.len()];
        for (i, &extent) in extents.iter().enumerate() {
            if extent != 0 {
                fenwick::array::update(&mut tree, i, i64::from(extent));
            }
        }
        Self { tree, extents }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// True if the index holds no lines.
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Extent of a single line.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn extent(&self, index: usize) -> u32 {
        self.extents[index]
    }

    /// Sets the extent of the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cellgrid::space::extent_index::ExtentIndex;
    /// let mut index = ExtentIndex::from_extents([5, 5]);
    /// index.set(0, 10);
    /// assert_eq!(index.start(1), 10);
    /// ```
    pub fn set(&mut self, index: usize, extent: u32) {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );

        let delta = i64::from(extent) - i64::from(self.extents[index]);
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
            self.extents[index] = extent;
        }
    }

    /// Cumulative extent of lines `0..=index` (the exclusive end of line `index`).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn end(&self, index: usize) -> i64 {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );
        fenwick::array::prefix_sum(&self.tree, index)
    }

    /// Leading pixel of line `index` (sum of all preceding extents).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cellgrid::space::extent_index::ExtentIndex;
    /// let index = ExtentIndex::from_extents([3, 4, 5]);
    /// assert_eq!(index.start(0), 0);
    /// assert_eq!(index.start(1), 3);
    /// assert_eq!(index.start(2), 7);
    /// ```
    pub fn start(&self, index: usize) -> i64 {
        self.end(index) - i64::from(self.extent(index))
    }

    /// Total extent of all lines.
    pub fn total(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.end(self.len() - 1)
        }
    }

    /// Index of the line covering `value`.
    ///
    /// Line i covers `[start(i), end(i))`, so zero-extent lines are never
    /// returned.
    ///
    /// # Returns
    ///
    /// - `Some(index)` of the first line whose end exceeds `value`
    /// - `None` if `value` is negative, `value >= total()` or the index is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use cellgrid::space::extent_index::ExtentIndex;
    /// let index = ExtentIndex::from_extents([10, 20, 15]);
    /// assert_eq!(index.find(0), Some(0));
    /// assert_eq!(index.find(10), Some(1));
    /// assert_eq!(index.find(44), Some(2));
    /// assert_eq!(index.find(45), None);
    /// assert_eq!(index.find(-1), None);
    /// ```
    pub fn find(&self, value: i64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.find_in(value, 0, self.len() - 1)
    }

    /// Like [`find`](Self::find) but only considers lines `low..=high`.
    ///
    /// Returns `None` if `value` falls outside the extent covered by those
    /// lines. `high` is clamped to the last line.
    pub fn find_in(&self, value: i64, low: usize, high: usize) -> Option<usize> {
        if self.is_empty() || value < 0 {
            return None;
        }
        let high = high.min(self.len() - 1);
        if low > high || value < self.start(low) || value >= self.end(high) {
            return None;
        }

        // First index in low..=high where end(index) > value
        let mut left = low;
        let mut right = high;
        while left < right {
            let mid = left + (right - left) / 2;
            if self.end(mid) > value {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        Some(left)
    }
}
