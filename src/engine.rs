//! Generic row-by-row DP engine.
//!
//! Two ways to drive a [`LayeredProblem`]:
//! 1. [`LayerEngine::run_full`] keeps every row in one contiguous buffer
//!    addressed by `row * width + col`.
//! 2. [`LayerEngine::run_rolling`] keeps only the previous and current row
//!    and returns the last one, in O(width) space.
//!
//! Both produce identical final rows.

use crate::error::{ResourceExhaustion, Result};
use crate::traits::LayeredProblem;
use crate::utils::{alloc_cells, table_cells};

/// Engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use knapsack_dp::{build_sequence, problems::knapsack::KnapsackProblem, LayerEngine};
///
/// let items = build_sequence(&[1, 2, 3], &[6, 10, 12]).unwrap();
/// let engine = LayerEngine::new(KnapsackProblem::new(&items, 5));
/// let last = engine.run_rolling().unwrap();
/// assert_eq!(last[5], 22);
/// ```
pub struct LayerEngine<P: LayeredProblem> {
    problem: P,
}

/// Every row of a full run, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullRun<C> {
    pub cells: Vec<C>,
    pub rows: usize,
    pub width: usize,
}

impl<P: LayeredProblem> LayerEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Materialise every row.
    ///
    /// Fails with [`ResourceExhaustion::TableTooLarge`] before allocating when
    /// `rows * width` overflows or exceeds `max_cells`, and with
    /// [`ResourceExhaustion::AllocationFailed`] when the buffer cannot be
    /// allocated.
    pub fn run_full(&self, max_cells: usize) -> Result<FullRun<P::Cell>> {
        let rows = self.problem.num_layers().max(1);
        let width = self.problem.width();
        let total = table_cells(rows, width)
            .filter(|&n| n <= max_cells)
            .ok_or(ResourceExhaustion::TableTooLarge {
                rows,
                width,
                limit: max_cells,
            })?;

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("run_full", rows, width, cells = total);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cells = alloc_cells(total, P::Cell::default())?;
        self.problem.init_layer(&mut cells[..width])?;

        for layer in 0..rows - 1 {
            #[cfg(feature = "tracing")]
            let _row = tracing::trace_span!("forward_step", layer).entered();
            // Row `layer` lives entirely in `done`, row `layer + 1` starts `rest`.
            let (done, rest) = cells.split_at_mut((layer + 1) * width);
            let prev = &done[layer * width..];
            self.problem.forward_step(layer, prev, &mut rest[..width])?;
        }

        Ok(FullRun { cells, rows, width })
    }

    /// Compute only the final row, keeping two rows live.
    ///
    /// Fails with [`ResourceExhaustion::AllocationFailed`] when either row
    /// cannot be allocated.
    pub fn run_rolling(&self) -> Result<Vec<P::Cell>> {
        let rows = self.problem.num_layers().max(1);
        let width = self.problem.width();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("run_rolling", rows, width);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut prev = alloc_cells(width, P::Cell::default())?;
        let mut next = alloc_cells(width, P::Cell::default())?;
        self.problem.init_layer(&mut prev)?;

        for layer in 0..rows - 1 {
            #[cfg(feature = "tracing")]
            let _row = tracing::trace_span!("forward_step", layer).entered();
            self.problem.forward_step(layer, &prev, &mut next)?;
            std::mem::swap(&mut prev, &mut next);
        }

        Ok(prev)
    }
}
