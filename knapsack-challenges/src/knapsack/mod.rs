use crate::{InstanceError, InstanceResult};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUDGET: u32 = 50;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub num_items: usize,
    /// Capacity as a percentage of the total item weight.
    pub budget: u32,
}

impl Track {
    pub fn new(num_items: usize) -> Self {
        Self {
            num_items,
            budget: DEFAULT_BUDGET,
        }
    }
}

/// Optimal total value of a knapsack instance.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct Solution {
    pub value: u64,
}

impl Solution {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl From<u64> for Solution {
    fn from(value: u64) -> Self {
        Self { value }
    }
}

/// Wire shape of an instance before validation. Signed so that negative inputs are
/// reported as such instead of as a generic parse failure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InstanceData {
    pub item_count: i64,
    pub capacity: i64,
    pub item_weights: Vec<i64>,
    pub item_values: Vec<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "InstanceData")]
pub struct Instance {
    pub item_count: usize,
    pub capacity: u32,
    #[serde(rename = "item_weights")]
    pub weights: Vec<u32>,
    #[serde(rename = "item_values")]
    pub values: Vec<u32>,
}

impl TryFrom<InstanceData> for Instance {
    type Error = InstanceError;

    fn try_from(data: InstanceData) -> InstanceResult<Self> {
        if data.item_count < 0 {
            return Err(InstanceError::NegativeItemCount {
                item_count: data.item_count,
            });
        }
        let item_count =
            usize::try_from(data.item_count).map_err(|_| InstanceError::ValueOutOfRange {
                field: "item_count",
                value: data.item_count,
            })?;
        if data.capacity < 0 {
            return Err(InstanceError::NegativeCapacity {
                capacity: data.capacity,
            });
        }
        let capacity = to_u32("capacity", data.capacity)?;
        let weights = to_u32_items("item_weights", &data.item_weights, item_count)?;
        let values = to_u32_items("item_values", &data.item_values, item_count)?;

        Ok(Instance {
            item_count,
            capacity,
            weights,
            values,
        })
    }
}

fn to_u32(field: &'static str, value: i64) -> InstanceResult<u32> {
    u32::try_from(value).map_err(|_| InstanceError::ValueOutOfRange { field, value })
}

fn to_u32_items(
    field: &'static str,
    items: &[i64],
    item_count: usize,
) -> InstanceResult<Vec<u32>> {
    if items.len() != item_count {
        return Err(InstanceError::LengthMismatch {
            field,
            len: items.len(),
            item_count,
        });
    }
    items
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value < 0 {
                Err(InstanceError::NegativeEntry {
                    field,
                    index,
                    value,
                })
            } else {
                to_u32(field, value)
            }
        })
        .collect()
}

impl Instance {
    pub fn new(capacity: u32, weights: Vec<u32>, values: Vec<u32>) -> InstanceResult<Self> {
        if weights.len() != values.len() {
            return Err(InstanceError::LengthMismatch {
                field: "item_values",
                len: values.len(),
                item_count: weights.len(),
            });
        }
        Ok(Instance {
            item_count: weights.len(),
            capacity,
            weights,
            values,
        })
    }

    pub fn generate_instance(seed: u64, track: &Track) -> Result<Instance> {
        if track.budget > 100 {
            return Err(anyhow!(
                "Budget ({}) must be a percentage between 0 and 100",
                track.budget
            ));
        }
        let mut rng = SmallRng::seed_from_u64(seed);

        // Weights in [1, 50], values in [1, 100]
        let weights: Vec<u32> = (0..track.num_items)
            .map(|_| rng.gen_range(1..=50))
            .collect();
        let values: Vec<u32> = (0..track.num_items)
            .map(|_| rng.gen_range(1..=100))
            .collect();

        let total_weight = weights.iter().map(|&w| w as u64).sum::<u64>();
        let capacity = u32::try_from(total_weight * track.budget as u64 / 100)
            .map_err(|_| anyhow!("Capacity for {} items exceeds u32", track.num_items))?;

        Ok(Instance {
            item_count: track.num_items,
            capacity,
            weights,
            values,
        })
    }

    /// Checks a reported value against the known optimum for this instance.
    pub fn verify_solution(&self, solution: &Solution, optimum: &Solution) -> Result<()> {
        if solution.value > optimum.value {
            Err(anyhow!(
                "Solution value ({}) exceeds optimal value ({})",
                solution.value,
                optimum.value
            ))
        } else if solution.value < optimum.value {
            Err(anyhow!(
                "Solution value ({}) is less than optimal value ({})",
                solution.value,
                optimum.value
            ))
        } else {
            Ok(())
        }
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|&w| w as u64).sum()
    }

    pub fn total_value(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }
}
