#![cfg(feature = "heavy")]
use knapsack_dp::{build_sequence, solve, TableBuilder};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn heavy_stress_rolling_large_capacity() {
    let mut rng = StdRng::seed_from_u64(123);
    let n = 2_000;
    let weights: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=5_000)).collect();
    let values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..10_000)).collect();
    let items = build_sequence(&weights, &values).unwrap();

    let capacity = 200_000;
    let best = solve(&items, capacity).unwrap();
    // Bounded by the sum of all values.
    assert!(best as u128 <= items.total_value());

    // Rolling and full table agree when the table fits.
    let small = TableBuilder::new(&items)
        .capacity(20_000)
        .max_cells(1 << 26)
        .build()
        .unwrap();
    assert_eq!(small.answer(), solve(&items, 20_000).unwrap());
}
