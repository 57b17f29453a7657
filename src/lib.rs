//! A minimal min-priority queue for schedulers and discrete-event systems.
//!
//! Elements are tagged with an `f64` priority ("when") and the lowest value is always served
//! first. [`PriorityQueue`] is safe to share between threads; [`MinHeap`] is the unsynchronized
//! core for single-owner use. Equal priorities come out in no particular order, and NaN
//! priorities are rejected with [`HeapError::NanPriority`].
pub mod error;
pub mod scheduling;

pub use error::HeapError;
pub use scheduling::{
    heap::{Entry, MinHeap, INITIAL_CAPACITY},
    queue::PriorityQueue,
    Prioritized,
};
