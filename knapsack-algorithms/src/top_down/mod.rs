use crate::MemoTable;
use knapsack_challenges::knapsack::*;

/// Backtracking recursion with each `(i, K)` subproblem solved once.
pub fn solve_challenge(instance: &Instance) -> Solution {
    let mut solver = TopDown {
        instance,
        table: MemoTable::new(instance.item_count, instance.capacity),
    };
    let value = solver.best_value(instance.item_count, instance.capacity as usize);
    log::debug!("top_down solved {} subproblems", solver.table.num_defined());
    Solution::new(value)
}

struct TopDown<'a> {
    instance: &'a Instance,
    table: MemoTable,
}

impl<'a> TopDown<'a> {
    fn best_value(&mut self, i: usize, k: usize) -> u64 {
        if i == 0 {
            return 0;
        }
        if let Some(value) = self.table.get(i, k) {
            return value;
        }
        let weight = self.instance.weights[i - 1] as usize;
        let value = self.instance.values[i - 1] as u64;

        let exclude = self.best_value(i - 1, k);
        let best = if weight > k {
            exclude
        } else {
            exclude.max(self.best_value(i - 1, k - weight) + value)
        };
        self.table.insert(i, k, best)
    }
}
