//! Concrete dynamic programs for the [`LayerEngine`](crate::engine::LayerEngine).
//!
//! - [`knapsack`] : 0-1 knapsack over a weight-sorted item sequence.

pub mod knapsack;
