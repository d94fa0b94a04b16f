//! Cumulative line offsets of event-list rows via a Fenwick tree.
//!
//! Rows (event cards and millennium markers) have variable heights that
//! depend on the viewport width. The index answers "where does row `i`
//! start" and "which row covers line `y`" in O(log n) and O(log² n).

/// Prefix sums over row heights.
#[derive(Debug, Clone, Default)]
pub struct CardIndex {
    /// Fenwick tree storage, 0-indexed API over the `fenwick` crate.
    tree: Vec<usize>,
}

impl CardIndex {
    /// Build from row heights in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use epochline::view_state::card_index::CardIndex;
    /// let index = CardIndex::from_heights([3, 5, 2]);
    /// assert_eq!(index.offset_of(2), 8);
    /// assert_eq!(index.total(), 10);
    /// ```
    pub fn from_heights(heights: impl IntoIterator<Item = usize>) -> Self {
        let heights: Vec<usize> = heights.into_iter().collect();
        let mut tree = vec![0; heights.len()];
        for (row, height) in heights.into_iter().enumerate() {
            if height > 0 {
                fenwick::array::update(&mut tree, row, height);
            }
        }
        Self { tree }
    }

    /// Number of rows indexed.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether no rows are indexed.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// First line of `row`: the sum of the heights of all earlier rows.
    ///
    /// Rows past the end report [`CardIndex::total`].
    pub fn offset_of(&self, row: usize) -> usize {
        if row == 0 || self.is_empty() {
            return 0;
        }
        let last = row.min(self.len()) - 1;
        fenwick::array::prefix_sum(&self.tree, last)
    }

    /// Total height of all rows.
    pub fn total(&self) -> usize {
        self.offset_of(self.len())
    }

    /// Height of a single row; 0 past the end.
    pub fn height_of(&self, row: usize) -> usize {
        if row >= self.len() {
            return 0;
        }
        self.offset_of(row + 1) - self.offset_of(row)
    }

    /// Row covering `line`, or `None` when `line >= total()`.
    ///
    /// Binary search for the first row whose end lies beyond `line`.
    pub fn row_at(&self, line: usize) -> Option<usize> {
        let mut left = 0;
        let mut right = self.len();

        while left < right {
            let mid = left + (right - left) / 2;
            if self.offset_of(mid + 1) > line {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        (left < self.len()).then_some(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_has_no_rows() {
        let index = CardIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.total(), 0);
        assert_eq!(index.offset_of(3), 0);
        assert_eq!(index.row_at(0), None);
    }

    #[test]
    fn offsets_accumulate_heights() {
        let index = CardIndex::from_heights([10, 20, 15]);
        assert_eq!(index.offset_of(0), 0);
        assert_eq!(index.offset_of(1), 10);
        assert_eq!(index.offset_of(2), 30);
        assert_eq!(index.total(), 45);
    }

    #[test]
    fn offset_past_end_is_total() {
        let index = CardIndex::from_heights([4, 4]);
        assert_eq!(index.offset_of(10), 8);
    }

    #[test]
    fn height_of_recovers_each_row() {
        let index = CardIndex::from_heights([2, 7, 1]);
        assert_eq!(index.height_of(0), 2);
        assert_eq!(index.height_of(1), 7);
        assert_eq!(index.height_of(2), 1);
        assert_eq!(index.height_of(3), 0);
    }

    #[test]
    fn row_at_maps_lines_to_rows() {
        let index = CardIndex::from_heights([10, 20, 15]);
        assert_eq!(index.row_at(0), Some(0));
        assert_eq!(index.row_at(9), Some(0));
        assert_eq!(index.row_at(10), Some(1));
        assert_eq!(index.row_at(29), Some(1));
        assert_eq!(index.row_at(30), Some(2));
        assert_eq!(index.row_at(44), Some(2));
        assert_eq!(index.row_at(45), None);
    }

    #[test]
    fn zero_height_rows_are_skipped_by_row_at() {
        let index = CardIndex::from_heights([0, 3, 0, 2]);
        assert_eq!(index.row_at(0), Some(1));
        assert_eq!(index.row_at(3), Some(3));
    }
}
