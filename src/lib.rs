//! 0-1 knapsack by dynamic programming.
//!
//! Given items with positive integer weights and non-negative integer values
//! and a capacity `W`, find the best total value of a subset whose weight is
//! at most `W`, each item used at most once.
//!
//! ## Pipeline
//! 1. [`build_sequence`] pairs raw weights and values and sorts them by
//!    `(weight, value)`.
//! 2. [`build_table`] fills the `N x (W + 1)` table row by row, or [`solve`]
//!    runs the same recurrence keeping only two rows live.
//! 3. The caller reads [`DpTable::answer`], reconstructs the chosen items
//!    with [`DpTable::selection`], or dumps the table with
//!    [`output::write_table`].
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{build_sequence, build_table};
//!
//! let items = build_sequence(
//!     &[23, 29, 31, 38, 44, 53, 63, 82, 85, 89],
//!     &[92, 49, 57, 43, 68, 60, 67, 72, 84, 87],
//! )?;
//! let table = build_table(&items, 165)?;
//! assert_eq!(table.answer(), 309);
//! assert!(table.selection().total_weight <= 165);
//! # Ok::<(), knapsack_dp::KnapsackError>(())
//! ```
//!
//! ## Cargo features
//! - `parallel`: fill each row's fit band with rayon.
//! - `tracing`: emit spans for table construction.

pub mod band;
pub mod builder;
pub mod engine;
pub mod error;
pub mod item;
pub mod output;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::{build_table, final_row, solve, TableBuilder};
pub use crate::engine::LayerEngine;
pub use crate::error::{InvalidInput, KnapsackError, ResourceExhaustion, Result};
pub use crate::item::{build_sequence, Item, ItemSequence};
pub use crate::table::{DpTable, Selection};
pub use crate::traits::LayeredProblem;
