use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(priority, item)` entries backed by a binary heap.
///
/// There is no decrease-key: improving an item's priority means pushing it
/// again and letting the consumer skip the outdated entry when it surfaces.
/// Equal priorities pop in ascending item order.
#[derive(Debug, Clone)]
pub struct MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }

    /// Smallest priority currently queued
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.peek().map(|Reverse((priority, _))| *priority)
    }
}
