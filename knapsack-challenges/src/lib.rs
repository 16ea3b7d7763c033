mod error;
pub use error::*;
pub mod knapsack;
pub use knapsack::{Instance, Solution, Track};
