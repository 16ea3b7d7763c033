mod memo;
pub use memo::*;
mod version;
pub use version::*;

pub mod backtracking;
pub mod bottom_up;
pub mod top_down;
