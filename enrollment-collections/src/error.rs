use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum CollectionError {
    #[error("list is already at its capacity of {capacity}")]
    CapacityExceeded { capacity: usize },
    #[error("list already contains an equal element")]
    DuplicateValue,
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("capacity {capacity} is below the current length {len}")]
    InvalidCapacity { capacity: usize, len: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is full, it holds at most {capacity} elements")]
    QueueFull { capacity: usize },
    #[error("queue is empty")]
    EmptyQueue,
    #[error("queue already contains an equal element")]
    DuplicateValue,
    #[error("capacity {capacity} is below the current length {len}")]
    InvalidCapacity { capacity: usize, len: usize },
}

/// Used for the list operations behind [`FifoWaitQueue`](crate::FifoWaitQueue),
/// none of which take an index.
impl From<CollectionError> for QueueError {
    fn from(value: CollectionError) -> Self {
        match value {
            CollectionError::CapacityExceeded { capacity } => Self::QueueFull { capacity },
            CollectionError::DuplicateValue => Self::DuplicateValue,
            CollectionError::IndexOutOfRange { .. } => Self::EmptyQueue,
            CollectionError::InvalidCapacity { capacity, len } => {
                Self::InvalidCapacity { capacity, len }
            }
        }
    }
}
