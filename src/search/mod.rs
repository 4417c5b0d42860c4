//! The bounded-suboptimality search engine.
//!
//! One [`FocalSearch`] invocation owns its entire mutable state: a [`NodeArena`]
//! registering every discovered cell and an OPEN heap over it. Both are
//! discarded when the invocation returns, so nothing leaks between searches and
//! the shared [`GridMap`](crate::GridMap) is the only long-lived input.

mod node;
pub use node::{NodeID, SearchNode};

mod arena;
pub use arena::NodeArena;

mod focal;
pub use focal::{FocalSearch, RankWeights, SearchParams};

use crate::Cost;

use std::cmp::Ordering;

/// An entry of the OPEN heap: Node id, `f` and `g` at push time, and the Node's
/// stamp at push time.
///
/// Entries are never removed when a Node is improved or finalized; instead the
/// stamp identifies outdated entries so they can be dropped when they surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OpenElement(pub NodeID, pub Cost, pub Cost, pub u32);

impl Eq for OpenElement {}

impl PartialOrd for OpenElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for OpenElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse on f for ascending order, and prefer
        // the deeper Node (larger g) when f ties.
        rhs.1
            .total_cmp(&self.1)
            .then_with(|| self.2.total_cmp(&rhs.2))
    }
}

#[cfg(test)]
mod tests {
    use super::OpenElement;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenElement(0, 7.0, 2.0, 0));
        heap.push(OpenElement(1, 3.0, 1.0, 0));
        heap.push(OpenElement(2, 5.0, 4.0, 0));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn equal_f_prefers_larger_g() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenElement(0, 6.0, 1.0, 0));
        heap.push(OpenElement(1, 6.0, 5.0, 0));
        heap.push(OpenElement(2, 6.0, 3.0, 0));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
