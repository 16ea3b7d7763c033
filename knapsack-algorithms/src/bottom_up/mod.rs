use knapsack_challenges::knapsack::*;
use ndarray::Array2;

/// Row-by-row tabulation of the knapsack recurrence. No recursion.
pub fn solve_challenge(instance: &Instance) -> Solution {
    let num_items = instance.item_count;
    let capacity = instance.capacity as usize;

    // Row 0 is the base case and stays zero.
    let mut table = Array2::<u64>::zeros((num_items + 1, capacity + 1));
    log::debug!("Allocated {}x{} table", num_items + 1, capacity + 1);

    for i in 1..=num_items {
        let weight = instance.weights[i - 1] as usize;
        let value = instance.values[i - 1] as u64;
        // Column 0 is only zero when no item weighs 0, so it is filled like the rest.
        for k in 0..=capacity {
            let mut best = table[[i - 1, k]];
            if weight <= k {
                best = best.max(table[[i - 1, k - weight]] + value);
            }
            table[[i, k]] = best;
        }
    }

    Solution::new(table[[num_items, capacity]])
}
