//! A monitor-style priority queue that can be shared between threads.
//!
//! Every operation takes the same instance-wide lock for its full duration, so each call is
//! atomic with respect to the others and never observes a half-repaired heap. Nothing here
//! blocks on a condition: dequeuing an empty queue fails immediately, and callers that want to
//! wait for work have to layer their own signalling on top.
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;

use crate::HeapError;

use super::{heap::MinHeap, Prioritized};

/// Thread-safe min-priority queue. The entry with the lowest `when` is always first.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: Mutex<MinHeap<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: Mutex::new(MinHeap::new()),
        }
    }

    /// Queue that holds at least `min_capacity` entries before its first growth.
    pub fn with_capacity(min_capacity: usize) -> Result<Self, HeapError> {
        Ok(Self {
            heap: Mutex::new(MinHeap::with_capacity(min_capacity)?),
        })
    }

    // Every mutation finishes repairing the heap before it can unwind, so a poisoned lock still
    // guards a valid heap.
    fn lock(&self) -> MutexGuard<'_, MinHeap<T>> {
        self.heap.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("recovering priority queue lock poisoned by a panicking caller");
            poisoned.into_inner()
        })
    }

    /// Insert `element` with priority `when`. Lower `when` values are served first.
    pub fn enqueue(&self, element: T, when: f64) -> Result<(), HeapError> {
        self.lock().push(element, when)
    }

    /// Insert an item that carries its own priority.
    pub fn schedule(&self, item: T) -> Result<(), HeapError>
    where
        T: Prioritized,
    {
        let when = item.when();
        self.enqueue(item, when)
    }

    /// Remove the first entry. Returns [`HeapError::Empty`] and leaves the queue untouched if
    /// there is nothing to remove.
    pub fn dequeue(&self) -> Result<(), HeapError> {
        self.lock().remove_first()
    }

    /// Remove the first entry and hand it back, in one atomic step.
    pub fn pop(&self) -> Option<(f64, T)> {
        self.lock().pop()
    }

    /// Pop the first entry only if its priority is at or before `now`.
    pub fn pop_due(&self, now: f64) -> Option<(f64, T)> {
        let mut heap = self.lock();
        if heap.first_when() <= now {
            heap.pop()
        } else {
            None
        }
    }

    /// A copy of the first element, or `None` when empty.
    pub fn peek_element(&self) -> Option<T>
    where
        T: Clone,
    {
        self.lock().peek().map(|(_, element)| element.clone())
    }

    /// Priority of the first element, `f64::INFINITY` when empty.
    pub fn peek_priority(&self) -> f64 {
        self.lock().first_when()
    }

    /// Run `f` against the first entry while holding the lock.
    pub fn with_first<R>(&self, f: impl FnOnce(Option<(f64, &T)>) -> R) -> R {
        f(self.lock().peek())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn clear(&self) {
        self.lock().clear()
    }
}
