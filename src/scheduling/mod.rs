//! Scheduling primitives for time-ordered systems.
//!
//! Currently, this module contains an array-backed binary min-heap and a lock-guarded priority
//! queue built on it, for "run this at time T" style event loops.
pub mod heap;
pub mod queue;

/// Trait for any item that carries its own scheduling priority.
pub trait Prioritized {
    fn when(&self) -> f64;
}
