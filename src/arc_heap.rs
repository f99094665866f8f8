use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An undirected candidate edge between two vertices. Immutable once built;
/// the same edge may sit in several fragments' heaps at once, and stale
/// copies are discarded by the selection loop, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub v1: usize,
    pub v2: usize,
    pub weight: isize,
}

// BinaryHeap is a max-heap, so arcs are wrapped with a reversed order to make
// pop() yield the cheapest. Ties fall through to the endpoints so the order
// is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MinWeight(Arc);

impl Ord for MinWeight {
    fn cmp(&self, other: &MinWeight) -> Ordering {
        other
            .0
            .weight
            .cmp(&self.0.weight)
            .then_with(|| other.0.v1.cmp(&self.0.v1))
            .then_with(|| other.0.v2.cmp(&self.0.v2))
    }
}

impl PartialOrd for MinWeight {
    fn partial_cmp(&self, other: &MinWeight) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of candidate arcs for one partial tree.
#[derive(Debug)]
pub struct ArcHeap {
    heap: BinaryHeap<MinWeight>,
}

impl ArcHeap {
    pub fn new() -> ArcHeap {
        ArcHeap {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, arc: Arc) {
        self.heap.push(MinWeight(arc));
    }

    /// Removes and returns the cheapest arc, or None once the pool is empty.
    pub fn delete_min(&mut self) -> Option<Arc> {
        self.heap.pop().map(|entry| entry.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains `other` into this heap. Used when two fragments merge.
    pub fn absorb(&mut self, mut other: ArcHeap) {
        self.heap.append(&mut other.heap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(v1: usize, v2: usize, weight: isize) -> Arc {
        Arc { v1, v2, weight }
    }

    #[test]
    fn delete_min_is_ascending() {
        let mut heap = ArcHeap::new();
        heap.insert(arc(0, 1, 7));
        heap.insert(arc(1, 2, 2));
        heap.insert(arc(2, 3, 5));
        let weights: Vec<isize> = (0..3).map(|_| heap.delete_min().unwrap().weight).collect();
        assert_eq!(weights, vec![2, 5, 7]);
        assert_eq!(heap.delete_min(), None);
    }

    #[test]
    fn equal_weights_break_ties_on_endpoints() {
        let mut heap = ArcHeap::new();
        heap.insert(arc(4, 1, 5));
        heap.insert(arc(0, 9, 5));
        heap.insert(arc(0, 2, 5));
        assert_eq!(heap.delete_min(), Some(arc(0, 2, 5)));
        assert_eq!(heap.delete_min(), Some(arc(0, 9, 5)));
        assert_eq!(heap.delete_min(), Some(arc(4, 1, 5)));
    }

    #[test]
    fn absorb_keeps_every_arc() {
        let mut left = ArcHeap::new();
        left.insert(arc(0, 1, 4));
        left.insert(arc(0, 2, 8));
        let mut right = ArcHeap::new();
        right.insert(arc(3, 0, 1));
        left.absorb(right);
        assert_eq!(left.len(), 3);
        assert_eq!(left.delete_min(), Some(arc(3, 0, 1)));
    }
}
