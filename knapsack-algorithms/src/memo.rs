use ndarray::Array2;

/// Memo table over subproblems `(i, K)`: the best value using only the first `i` items
/// with remaining capacity `K`. Each cell is written at most once.
#[derive(Debug, Clone)]
pub struct MemoTable {
    cells: Array2<Option<u64>>,
}

impl MemoTable {
    pub fn new(item_count: usize, capacity: u32) -> Self {
        let shape = (item_count + 1, capacity as usize + 1);
        log::debug!("Allocating {}x{} memo table", shape.0, shape.1);
        Self {
            cells: Array2::from_elem(shape, None),
        }
    }

    pub fn get(&self, i: usize, k: usize) -> Option<u64> {
        self.cells[[i, k]]
    }

    /// Records the value of `(i, k)` and returns it.
    pub fn insert(&mut self, i: usize, k: usize, value: u64) -> u64 {
        let cell = &mut self.cells[[i, k]];
        debug_assert!(cell.is_none(), "memo cell ({}, {}) written twice", i, k);
        *cell = Some(value);
        value
    }

    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn num_defined(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
