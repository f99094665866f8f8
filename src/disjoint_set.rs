
// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//
// Union-find over vertex indices, used to track which partial tree a vertex
// currently belongs to. No path compression and no union by rank: the tree
// list identifies a fragment by its exact root vertex, and a merge must leave
// the surviving fragment's root in place, so the parent table keeps plain
// links only and `find` never mutates.
#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    pub fn make_singletons(size: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..size).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Chases parent links from `vertex` to the fixed point where a vertex is
    /// its own parent. The chain length is bounded by the number of vertices.
    pub fn find(&self, vertex: usize) -> usize {
        let mut at = vertex;
        while self.parent[at] != at {
            at = self.parent[at];
            trace!("root chase: {} -> {}", vertex, at);
        }
        at
    }

    /// Points `root` (which must currently be a root) at `onto`. All vertices
    /// that resolved to `root` now resolve to `onto`'s root.
    pub fn link(&mut self, root: usize, onto: usize) {
        debug_assert_eq!(self.parent[root], root, "link of a non-root vertex");
        self.parent[root] = onto;
    }
}
