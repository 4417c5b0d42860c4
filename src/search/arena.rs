use super::{NodeID, SearchNode};
use crate::{Point, PointMap};

/// All Nodes discovered during one search invocation, indexed by [`NodeID`] and
/// by coordinate.
///
/// Nodes are referred to by id everywhere (parent links included), so neighbor
/// discovery and cost improvement always touch the same record instead of
/// aliased copies. The arena never removes Nodes; it is dropped as a whole when
/// the invocation ends.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: slab::Slab<SearchNode>,
    pos_map: PointMap<NodeID>,
}

impl NodeArena {
    /// Creates an empty arena.
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Creates an empty arena with room for `capacity` Nodes.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: slab::Slab::with_capacity(capacity),
            pos_map: PointMap::with_capacity(capacity),
        }
    }

    /// Registers a newly discovered Node and returns its id.
    ///
    /// Callers must resolve existing Nodes through [`id_at`](NodeArena::id_at)
    /// first; every coordinate has at most one Node.
    pub fn insert(&mut self, node: SearchNode) -> NodeID {
        debug_assert!(!self.pos_map.contains_key(&node.pos));
        let pos = node.pos;
        let id = self.nodes.insert(node);
        self.pos_map.insert(pos, id);
        id
    }

    /// The id of the Node at `pos`, if that cell has been discovered.
    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    /// The number of discovered Nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if no Node has been discovered yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

use std::ops::{Index, IndexMut};

impl Index<NodeID> for NodeArena {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: NodeID) -> &SearchNode {
        &self.nodes[index]
    }
}

impl IndexMut<NodeID> for NodeArena {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut SearchNode {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_by_coordinate() {
        let mut arena = NodeArena::new();
        assert!(arena.is_empty());

        let id = arena.insert(SearchNode::new((1, 2), 0.0, 3.0, 0.6, None));
        assert_eq!(arena.id_at((1, 2)), Some(id));
        assert_eq!(arena.id_at((2, 1)), None);
        assert_eq!(arena.len(), 1);

        arena[id].g = 4.0;
        assert_eq!(arena[id].g, 4.0);
    }
}
