use knapsack_challenges::knapsack::*;

/// Exhaustive include/exclude search. Exponential in the number of items.
pub fn solve_challenge(instance: &Instance) -> Solution {
    Solution::new(best_value(instance, instance.item_count, instance.capacity as u64))
}

// Best value using the first `i` items with capacity `k`.
fn best_value(instance: &Instance, i: usize, k: u64) -> u64 {
    if i == 0 {
        return 0;
    }
    let weight = instance.weights[i - 1] as u64;
    let value = instance.values[i - 1] as u64;

    let exclude = best_value(instance, i - 1, k);
    if weight > k {
        // including the item would leave negative capacity
        return exclude;
    }
    let include = best_value(instance, i - 1, k - weight) + value;
    exclude.max(include)
}
