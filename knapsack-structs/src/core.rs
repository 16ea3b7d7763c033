use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use std::fmt;
pub use knapsack_challenges::knapsack::{Instance, Solution};
use knapsack_utils::jsonify;

serializable_struct_with_getters! {
    Experiment {
        version: Option<String>,
    }
}
serializable_struct_with_getters! {
    OutputData {
        solution: Solution,
        time: f64,
    }
}
serializable_struct_with_getters! {
    KnownSolution {
        solution: Solution,
        time: Option<f64>,
    }
}

/// Reference solutions shipped alongside an instance. Either a single entry or a list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Solutions {
    Many(Vec<KnownSolution>),
    One(KnownSolution),
}

impl Solutions {
    pub fn values(&self) -> Vec<Solution> {
        match self {
            Solutions::Many(solutions) => solutions.iter().map(|s| s.solution).collect(),
            Solutions::One(solution) => vec![solution.solution],
        }
    }
}

impl fmt::Display for OutputData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", jsonify(self))
    }
}
