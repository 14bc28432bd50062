//! 0-1 knapsack as a layered DP.
//!
//! Layer `i` is the best value for every capacity `0..=W` using the first
//! `i + 1` items of a sorted [`ItemSequence`]. Row 0 takes item 0 wherever it
//! fits; every later row copies the previous row below the item's weight and
//! runs the take-or-skip recurrence from the weight upwards:
//!
//! ```text
//! row[i][c] = row[i-1][c]                                   c <  w_i
//! row[i][c] = max(row[i-1][c], v_i + row[i-1][c - w_i])     c >= w_i
//! ```
//!
//! With no items at all the single layer is all zeros.

use crate::band::Band;
use crate::error::{ResourceExhaustion, Result};
use crate::item::{Item, ItemSequence};
use crate::traits::LayeredProblem;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many fit-band cells a row is filled serially.
#[cfg(feature = "parallel")]
const PAR_MIN_CELLS: usize = 4096;

#[derive(Clone, Copy)]
pub struct KnapsackProblem<'a> {
    items: &'a ItemSequence,
    capacity: usize,
}

impl<'a> KnapsackProblem<'a> {
    /// `capacity + 1` must not overflow; callers size-check first.
    pub fn new(items: &'a ItemSequence, capacity: usize) -> Self {
        Self { items, capacity }
    }

    fn band(&self, item: &Item) -> Band {
        Band::new(item.weight(), self.width())
    }
}

impl<'a> LayeredProblem for KnapsackProblem<'a> {
    type Cell = u64;

    fn num_layers(&self) -> usize {
        self.items.len().max(1)
    }

    fn width(&self) -> usize {
        self.capacity + 1
    }

    fn init_layer(&self, out: &mut [u64]) -> Result<()> {
        out.fill(0);
        if let Some(first) = self.items.get(0) {
            let band = self.band(first);
            out[band.fit_range()].fill(first.value());
        }
        Ok(())
    }

    fn forward_step(&self, layer: usize, prev: &[u64], next: &mut [u64]) -> Result<()> {
        let row = layer + 1;
        let Some(item) = self.items.get(row) else {
            next.copy_from_slice(prev);
            return Ok(());
        };
        let band = self.band(item);
        if band.is_unreachable() {
            next.copy_from_slice(prev);
            return Ok(());
        }

        next[band.copy_range()].copy_from_slice(&prev[band.copy_range()]);
        fill_fit_band(row, band, item.value(), prev, &mut next[band.fit_range()])?;
        Ok(())
    }
}

/// `max(skip, value + shifted)` or an overflow error naming the cell.
#[inline]
fn take_or_skip(
    row: usize,
    capacity: usize,
    value: u64,
    skip: u64,
    shifted: u64,
) -> std::result::Result<u64, ResourceExhaustion> {
    let take = value
        .checked_add(shifted)
        .ok_or(ResourceExhaustion::ValueOverflow { row, capacity })?;
    Ok(skip.max(take))
}

// `fit[k]` is capacity `band.split + k`; the shifted read is `prev[k]`.

#[cfg(not(feature = "parallel"))]
fn fill_fit_band(
    row: usize,
    band: Band,
    value: u64,
    prev: &[u64],
    fit: &mut [u64],
) -> Result<()> {
    for (k, slot) in fit.iter_mut().enumerate() {
        let c = band.split + k;
        *slot = take_or_skip(row, c, value, prev[c], prev[k])?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn fill_fit_band(
    row: usize,
    band: Band,
    value: u64,
    prev: &[u64],
    fit: &mut [u64],
) -> Result<()> {
    fit.par_iter_mut()
        .with_min_len(PAR_MIN_CELLS)
        .enumerate()
        .try_for_each(|(k, slot)| {
            let c = band.split + k;
            *slot = take_or_skip(row, c, value, prev[c], prev[k])?;
            Ok::<(), ResourceExhaustion>(())
        })?;
    Ok(())
}
