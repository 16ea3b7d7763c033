#[derive(Debug, PartialEq)]
pub enum InstanceError {
    LengthMismatch {
        field: &'static str,
        len: usize,
        item_count: usize,
    },
    NegativeCapacity {
        capacity: i64,
    },
    NegativeItemCount {
        item_count: i64,
    },
    NegativeEntry {
        field: &'static str,
        index: usize,
        value: i64,
    },
    ValueOutOfRange {
        field: &'static str,
        value: i64,
    },
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::LengthMismatch {
                field,
                len,
                item_count,
            } => write!(
                f,
                "'{}' has {} entries but item_count is {}",
                field, len, item_count
            ),
            InstanceError::NegativeCapacity { capacity } => {
                write!(f, "capacity ({}) must be non-negative", capacity)
            }
            InstanceError::NegativeItemCount { item_count } => {
                write!(f, "item_count ({}) must be non-negative", item_count)
            }
            InstanceError::NegativeEntry {
                field,
                index,
                value,
            } => write!(
                f,
                "'{}[{}]' ({}) must be non-negative",
                field, index, value
            ),
            InstanceError::ValueOutOfRange { field, value } => write!(
                f,
                "'{}' ({}) exceeds the maximum of {}",
                field,
                value,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InstanceError {}

pub type InstanceResult<T> = std::result::Result<T, InstanceError>;
