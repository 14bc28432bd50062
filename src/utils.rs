//! Assorted sizing helpers.

use crate::error::ResourceExhaustion;

/// Default cap on the number of cells a full table may hold (2^28 cells,
/// 2 GiB of `u64`).
pub const DEFAULT_MAX_CELLS: usize = 1 << 28;

/// Number of cells in a `rows x width` table, or `None` on overflow.
#[inline]
pub fn table_cells(rows: usize, width: usize) -> Option<usize> {
    rows.checked_mul(width)
}

/// Row width for `capacity`: one column per capacity `0..=capacity`.
///
/// `None` when the capacity is not addressable as a column index or a row of
/// `u64` cells that wide could never be allocated.
#[inline]
pub fn row_width(capacity: u64) -> Option<usize> {
    let width = usize::try_from(capacity).ok()?.checked_add(1)?;
    width
        .checked_mul(std::mem::size_of::<u64>())
        .filter(|&bytes| bytes <= isize::MAX as usize)?;
    Some(width)
}

/// A vector of `len` copies of `fill`, or an error if the allocator refuses.
pub fn alloc_cells<C: Copy>(len: usize, fill: C) -> Result<Vec<C>, ResourceExhaustion> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| ResourceExhaustion::AllocationFailed { cells: len })?;
    cells.resize(len, fill);
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_multiply() {
        assert_eq!(table_cells(0, 10), Some(0));
        assert_eq!(table_cells(10, 166), Some(1660));
        assert_eq!(table_cells(usize::MAX, 2), None);
    }

    #[test]
    fn width_includes_zero_capacity() {
        assert_eq!(row_width(0), Some(1));
        assert_eq!(row_width(165), Some(166));
        assert_eq!(row_width(usize::MAX as u64), None);
        assert_eq!(row_width(i64::MAX as u64), None);
    }

    #[test]
    fn alloc_reports_impossible_sizes() {
        assert_eq!(alloc_cells(3, 7u64).unwrap(), vec![7, 7, 7]);
        assert!(alloc_cells(0, 0u64).unwrap().is_empty());
        assert_eq!(
            alloc_cells(usize::MAX, 0u64).unwrap_err(),
            ResourceExhaustion::AllocationFailed { cells: usize::MAX }
        );
    }
}
