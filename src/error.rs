use thiserror::Error;

/// Error type for the heap and the queue built on it
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    #[error("Priority queue empty")]
    Empty,
    #[error("NaN is not an orderable priority")]
    NanPriority,
    #[error("Failed to grow heap storage to {requested} slots")]
    CapacityExhausted { requested: usize },
}
