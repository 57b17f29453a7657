//! Array-backed binary min-heap keyed on an `f64` priority.
//!
//! Entries live in a single `Vec` laid out as an implicit binary tree: the children of slot `i`
//! are `2i + 1` and `2i + 2`, and the root always carries the lowest `when`. Insertion appends a
//! leaf and sifts it up, removal moves the last leaf into the root and sifts it down, so both
//! run in O(log n). This type does no locking of its own; see [`super::queue::PriorityQueue`]
//! for the shared version.
use log::{debug, error, trace, warn};

use crate::HeapError;

/// Slot count of a freshly created heap.
pub const INITIAL_CAPACITY: usize = 64 - 1;

/// A single element tagged with its priority.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub when: f64,
    pub element: T,
}

/// Next step of the capacity sequence 63, 127, 255, ...
fn next_capacity(capacity: usize) -> Option<usize> {
    capacity
        .checked_add(1)
        .and_then(|c| c.checked_mul(2))
        .map(|c| c - 1)
}

#[derive(Debug)]
/// Unsynchronized binary min-heap with monotonic, amortized-doubling growth.
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    capacity: usize,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<T> MinHeap<T> {
    /// Empty heap with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Empty heap able to hold at least `min_capacity` entries before growing. The capacity is
    /// rounded up along the same sequence that growth follows.
    pub fn with_capacity(min_capacity: usize) -> Result<Self, HeapError> {
        let mut capacity = INITIAL_CAPACITY;
        while capacity < min_capacity {
            capacity = next_capacity(capacity).ok_or(HeapError::CapacityExhausted {
                requested: min_capacity,
            })?;
        }
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| HeapError::CapacityExhausted {
                requested: capacity,
            })?;
        Ok(Self { entries, capacity })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Allocated slot count. Never shrinks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Root entry, if any.
    pub fn peek(&self) -> Option<(f64, &T)> {
        self.entries.first().map(|e| (e.when, &e.element))
    }

    /// Priority of the root, or `f64::INFINITY` when the heap is empty.
    pub fn first_when(&self) -> f64 {
        self.entries.first().map_or(f64::INFINITY, |e| e.when)
    }

    /// Insert `element` with priority `when`. Lower values come out first.
    pub fn push(&mut self, element: T, when: f64) -> Result<(), HeapError> {
        if when.is_nan() {
            warn!("rejected NaN priority");
            return Err(HeapError::NanPriority);
        }
        self.ensure_space(self.entries.len() + 1)?;
        self.entries.push(Entry { when, element });
        self.sift_up(self.entries.len() - 1);
        trace!("pushed entry at {when}, {} live", self.entries.len());
        Ok(())
    }

    /// Remove and return the root entry.
    pub fn pop(&mut self) -> Option<(f64, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let Entry { when, element } = self.entries.swap_remove(0);
        self.sift_down(0);
        trace!("popped entry at {when}, {} live", self.entries.len());
        Some((when, element))
    }

    /// Drop the root entry. Fails without touching the heap when it is empty.
    pub fn remove_first(&mut self) -> Result<(), HeapError> {
        self.pop().map(|_| ()).ok_or(HeapError::Empty)
    }

    /// Drop every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn ensure_space(&mut self, space: usize) -> Result<(), HeapError> {
        if space <= self.capacity {
            return Ok(());
        }
        let new_capacity =
            next_capacity(self.capacity).ok_or(HeapError::CapacityExhausted { requested: space })?;
        let additional = new_capacity - self.entries.len();
        if let Err(err) = self.entries.try_reserve_exact(additional) {
            error!("heap growth to {new_capacity} slots failed: {err}");
            return Err(HeapError::CapacityExhausted {
                requested: new_capacity,
            });
        }
        debug!("heap grew from {} to {new_capacity} slots", self.capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    // new leaf at `me`, only its ancestors can be out of order
    fn sift_up(&mut self, mut me: usize) {
        while me > 0 {
            let parent = (me + 1) / 2 - 1;
            if self.entries[me].when >= self.entries[parent].when {
                break;
            }
            self.entries.swap(me, parent);
            me = parent;
        }
    }

    // replaced entry at `me`, only its descendants can be out of order
    fn sift_down(&mut self, mut me: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * me + 1;
            let right = left + 1;
            let mut first = me;
            if left < len && self.entries[left].when < self.entries[first].when {
                first = left;
            }
            if right < len && self.entries[right].when < self.entries[first].when {
                first = right;
            }
            if first == me {
                break;
            }
            self.entries.swap(me, first);
            me = first;
        }
    }

    #[cfg(test)]
    pub(crate) fn holds_heap_property(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[(i - 1) / 2].when <= self.entries[i].when)
    }
}
