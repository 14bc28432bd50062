//! The materialised knapsack table and solution reconstruction.
//!
//! Cells are indexed directly by capacity: `cell(i, c)` is the best value for
//! capacity `c` using sorted items `0..=i`. The legacy dump shape, with the
//! row item's weight in front, is available through [`DpTable::legacy_row`].

use crate::item::ItemSequence;

/// N rows by `capacity + 1` columns of best values, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    items: ItemSequence,
    cells: Vec<u64>,
    rows: usize,
    stride: usize,
}

/// Items picked by a reconstruction walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Positions in the sorted sequence, ascending.
    pub positions: Vec<usize>,
    /// Caller input indices of the same items, in the same order.
    pub origins: Vec<usize>,
    pub total_weight: u64,
    pub total_value: u64,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl DpTable {
    /// `cells.len()` must equal `rows * stride` and `rows` must be
    /// `max(items.len(), 1)`.
    pub(crate) fn from_parts(
        items: ItemSequence,
        cells: Vec<u64>,
        rows: usize,
        stride: usize,
    ) -> Self {
        debug_assert_eq!(cells.len(), rows * stride);
        debug_assert_eq!(rows, items.len().max(1));
        Self {
            items,
            cells,
            rows,
            stride,
        }
    }

    pub fn items(&self) -> &ItemSequence {
        &self.items
    }

    /// Number of rows; 1 for an empty item sequence.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of capacity columns, `capacity + 1`.
    pub fn width(&self) -> usize {
        self.stride
    }

    pub fn capacity(&self) -> usize {
        self.stride - 1
    }

    pub fn get(&self, row: usize, capacity: usize) -> Option<u64> {
        if row >= self.rows || capacity >= self.stride {
            return None;
        }
        Some(self.cells[row * self.stride + capacity])
    }

    /// Cells of one row, indexed by capacity.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[u64] {
        let start = row * self.stride;
        &self.cells[start..start + self.stride]
    }

    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, u64> {
        self.cells.chunks_exact(self.stride)
    }

    pub fn last_row(&self) -> &[u64] {
        self.row(self.rows - 1)
    }

    /// Best value for the full capacity using every item.
    pub fn answer(&self) -> u64 {
        self.cells[self.cells.len() - 1]
    }

    /// Row in the legacy `capacity + 2` field shape: the row item's weight
    /// (0 when there are no items) followed by capacities `0..=W`.
    pub fn legacy_row(&self, row: usize) -> Vec<u64> {
        let weight = self.items.get(row).map_or(0, |item| item.weight());
        let mut out = Vec::with_capacity(self.stride + 1);
        out.push(weight);
        out.extend_from_slice(self.row(row));
        out
    }

    /// Reconstruct one optimal subset for the full capacity.
    pub fn selection(&self) -> Selection {
        self.selection_at(self.capacity())
    }

    /// Reconstruct one optimal subset for any capacity `<= self.capacity()`.
    ///
    /// Walks upwards from `(N-1, capacity)`: a cell that differs from the one
    /// above it means the row's item was taken. Capacities beyond the table
    /// are clamped to the last column.
    pub fn selection_at(&self, capacity: usize) -> Selection {
        let mut selection = Selection::default();
        if self.items.is_empty() {
            return selection;
        }

        let mut c = capacity.min(self.capacity());
        let mut taken = Vec::new();
        for row in (1..self.rows).rev() {
            if self.row(row)[c] != self.row(row - 1)[c] {
                let weight = self.items.as_slice()[row].weight() as usize;
                taken.push(row);
                c -= weight;
            }
        }
        if self.row(0)[c] != 0 {
            taken.push(0);
        }
        taken.reverse();

        for position in taken {
            let item = self.items.as_slice()[position];
            selection.positions.push(position);
            selection.origins.extend(self.items.origin(position));
            selection.total_weight += item.weight();
            selection.total_value += item.value();
        }
        selection
    }
}
