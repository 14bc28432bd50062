//! Validated entry points for building a table or solving in rolling mode.

use crate::engine::LayerEngine;
use crate::error::{InvalidInput, ResourceExhaustion, Result};
use crate::item::ItemSequence;
use crate::problems::knapsack::KnapsackProblem;
use crate::table::DpTable;
use crate::utils::{row_width, DEFAULT_MAX_CELLS};

pub struct TableBuilder<'a> {
    items: &'a ItemSequence,
    capacity: i64,
    max_cells: usize,
}

impl<'a> TableBuilder<'a> {
    /// Capacity defaults to 0 and the cell limit to [`DEFAULT_MAX_CELLS`].
    pub fn new(items: &'a ItemSequence) -> Self {
        Self {
            items,
            capacity: 0,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Build the full `N x (W + 1)` table.
    pub fn build(self) -> Result<DpTable> {
        let problem = self.problem()?;
        let run = LayerEngine::new(problem).run_full(self.max_cells)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = run.rows,
            width = run.width,
            answer = run.cells.last().copied().unwrap_or(0),
            "table built"
        );
        Ok(DpTable::from_parts(
            self.items.clone(),
            run.cells,
            run.rows,
            run.width,
        ))
    }

    /// Best value at the full capacity, keeping two rows live.
    pub fn solve(self) -> Result<u64> {
        let row = self.final_row()?;
        Ok(row.last().copied().unwrap_or(0))
    }

    /// Last table row, computed without materialising the others.
    pub fn final_row(self) -> Result<Vec<u64>> {
        let problem = self.problem()?;
        LayerEngine::new(problem).run_rolling()
    }

    fn problem(&self) -> Result<KnapsackProblem<'a>> {
        if self.capacity < 0 {
            return Err(InvalidInput::NegativeCapacity(self.capacity).into());
        }
        let capacity = self.capacity as u64;
        // Width must be addressable even though the problem only stores W.
        row_width(capacity).ok_or(ResourceExhaustion::CapacityTooLarge(capacity))?;
        Ok(KnapsackProblem::new(self.items, capacity as usize))
    }
}

/// Build the full table for `items` at `capacity` with the default cell limit.
pub fn build_table(items: &ItemSequence, capacity: i64) -> Result<DpTable> {
    TableBuilder::new(items).capacity(capacity).build()
}

/// Best value for `items` at `capacity` in O(capacity) space.
pub fn solve(items: &ItemSequence, capacity: i64) -> Result<u64> {
    TableBuilder::new(items).capacity(capacity).solve()
}

/// Last table row for `items` at `capacity` in O(capacity) space.
pub fn final_row(items: &ItemSequence, capacity: i64) -> Result<Vec<u64>> {
    TableBuilder::new(items).capacity(capacity).final_row()
}
