//! Example: the ten-item reference instance, solved and reconstructed.
//!
//! Run with:
//! `cargo run --example reference`

use knapsack_dp::{build_sequence, build_table};

fn main() -> Result<(), knapsack_dp::KnapsackError> {
    let weights = [23, 29, 31, 38, 44, 53, 63, 82, 85, 89];
    let values = [92, 49, 57, 43, 68, 60, 67, 72, 84, 87];
    let capacity = 165;

    let items = build_sequence(&weights, &values)?;
    let table = build_table(&items, capacity)?;

    println!("Best value: {}", table.answer());

    let selection = table.selection();
    println!(
        "Selected {} items, total weight {} of {capacity}:",
        selection.len(),
        selection.total_weight
    );
    for &index in &selection.origins {
        println!("  item {index}: weight {}, value {}", weights[index], values[index]);
    }
    Ok(())
}
