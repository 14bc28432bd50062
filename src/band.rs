//! Band split of a single table row.
//!
//! For an item of weight `w` on a row of width `W + 1`, capacities `[0, w)`
//! cannot hold the item and copy the previous row, while `[w, W]` run the
//! take-or-skip recurrence.

use std::ops::Range;

/// Split point of one row into its copy band and its fit band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First capacity that can hold the item (clamped to `width`).
    pub split: usize,
    /// Number of capacity columns in the row.
    pub width: usize,
}

impl Band {
    pub fn new(weight: u64, width: usize) -> Self {
        let split = usize::try_from(weight).map_or(width, |w| w.min(width));
        Self { split, width }
    }

    /// Capacities where the item does not fit.
    #[inline]
    pub fn copy_range(&self) -> Range<usize> {
        0..self.split
    }

    /// Capacities where the item fits.
    #[inline]
    pub fn fit_range(&self) -> Range<usize> {
        self.split..self.width
    }

    /// Number of capacities where the item fits.
    #[inline]
    pub fn fit_len(&self) -> usize {
        self.width.saturating_sub(self.split)
    }

    /// True if the item is heavier than every capacity in the row.
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        self.fit_len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::Band;

    #[test]
    fn item_heavier_than_row_is_unreachable() {
        let b = Band::new(12, 11);
        assert_eq!(b.copy_range(), 0..11);
        assert!(b.is_unreachable());

        let b = Band::new(u64::MAX, 4);
        assert_eq!(b.split, 4);
        assert!(b.is_unreachable());
    }

    #[test]
    fn typical_split() {
        let b = Band::new(3, 11);
        assert_eq!(b.copy_range(), 0..3);
        assert_eq!(b.fit_range(), 3..11);
        assert_eq!(b.fit_len(), 8);
        assert!(!b.is_unreachable());
    }

    #[test]
    fn weight_equal_to_capacity_fits_last_column() {
        let b = Band::new(10, 11);
        assert_eq!(b.fit_range(), 10..11);
    }
}
