//! Core trait definition for row-by-row dynamic programs.
//!
//! A [`LayeredProblem`] describes a table whose rows are produced strictly in
//! order, each from the previous row only. The engine owns all buffers and
//! decides whether every row is kept (full table) or only the last two
//! (rolling mode); implementations only fill the slices they are handed.
//!
//! Semantics:
//! - There are `num_layers()` rows, at least one.
//! - `init_layer` writes row 0.
//! - `forward_step(i, prev, next)` writes row `i + 1` from row `i`.
//! - Every row has exactly `width()` cells.

use crate::error::Result;

/// Trait for a layered DP instance with fixed-width rows.
pub trait LayeredProblem {
    /// Cell type stored in the table.
    type Cell: Copy + Default;

    /// Number of rows. Must be at least 1.
    fn num_layers(&self) -> usize;

    /// Number of cells per row.
    fn width(&self) -> usize;

    /// Fill row 0. `out.len() == self.width()`.
    fn init_layer(&self, out: &mut [Self::Cell]) -> Result<()>;

    /// Fill row `layer + 1` from row `layer`.
    ///
    /// Requirements:
    /// - Must only read `prev` and fixed problem data.
    /// - Must write every cell of `next`.
    fn forward_step(
        &self,
        layer: usize,
        prev: &[Self::Cell],
        next: &mut [Self::Cell],
    ) -> Result<()>;
}
