//! Min-priority queue used by the A* frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A min-first priority queue keyed by an `f64` priority.
///
/// Entries with equal priority come out in insertion order (first pushed,
/// first popped), which keeps searches deterministic. The same value may be
/// queued several times at different priorities; the queue does not
/// deduplicate. Priorities are compared with [`f64::total_cmp`], so a NaN
/// priority sorts after every finite one.
#[derive(Clone, Debug)]
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    value: T,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse both keys so BinaryHeap (max-heap) pops the smallest
        // priority, oldest entry first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `value` with the given priority.
    pub fn push(&mut self, value: T, priority: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            value,
        });
    }

    /// Remove and return the value with the smallest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
