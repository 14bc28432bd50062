//! Example: dump a small table in the legacy comma-separated layout.
//!
//! Run with:
//! `cargo run --example table_dump`

use std::io;

use knapsack_dp::output::{write_table, Layout, Separator};
use knapsack_dp::{build_sequence, build_table};

fn main() -> Result<(), knapsack_dp::KnapsackError> {
    let items = build_sequence(&[1, 2, 3, 4, 5], &[2, 4, 6, 8, 10])?;
    let table = build_table(&items, 10)?;

    // Each line: item weight, then best value for capacities 0..=10.
    write_table(&table, Layout::Legacy(Separator::Comma), &mut io::stdout().lock())?;
    Ok(())
}
