use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};


/// Exploration order for the shared expansion loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Priority order on `cost + heuristic`, A* style
    BestFirst,
    /// Last in first out
    DepthFirst,
    /// First in first out
    BreadthFirst,
}


/// Best-first queue entry
/// - handle identifies the search state in the arena
/// - bound is `cost + heuristic`, the ordering key
#[derive(Debug)]
pub(super) struct HeapEntry {
    handle: usize,
    bound: f64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, reverse for smallest bound first
        other.bound.total_cmp(&self.bound)
    }
}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound
    }
}
impl Eq for HeapEntry {}


/// Pending search states in the order the chosen strategy explores them
/// All variants store arena handles; only best-first keeps the bound around
pub(super) enum Frontier {
    BestFirst(BinaryHeap<HeapEntry>),
    DepthFirst(Vec<usize>),
    BreadthFirst(VecDeque<usize>),
}

impl Frontier {

    pub fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BestFirst => Frontier::BestFirst(BinaryHeap::new()),
            Strategy::DepthFirst => Frontier::DepthFirst(Vec::new()),
            Strategy::BreadthFirst => Frontier::BreadthFirst(VecDeque::new()),
        }
    }

    pub fn push(&mut self, handle: usize, bound: f64) {
        match self {
            Frontier::BestFirst(heap) => heap.push(HeapEntry { handle, bound }),
            Frontier::DepthFirst(stack) => stack.push(handle),
            Frontier::BreadthFirst(queue) => queue.push_back(handle),
        }
    }

    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::BestFirst(heap) => heap.pop().map(|entry| entry.handle),
            Frontier::DepthFirst(stack) => stack.pop(),
            Frontier::BreadthFirst(queue) => queue.pop_front(),
        }
    }
}
