use arc_heap::{Arc, ArcHeap};
use disjoint_set::DisjointSet;

/// One fragment of the eventual MST: a root vertex plus the min-heap of
/// candidate arcs leaving the fragment.
#[derive(Debug)]
pub struct PartialTree {
    root: usize,
    arcs: ArcHeap,
}

impl PartialTree {
    pub fn new(root: usize) -> PartialTree {
        PartialTree {
            root,
            arcs: ArcHeap::new(),
        }
    }

    /// The representative vertex identifying this fragment in the tree list.
    pub fn root(&self) -> usize {
        self.root
    }

    pub fn arcs(&mut self) -> &mut ArcHeap {
        &mut self.arcs
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Absorbs `other` into this fragment: its root now resolves to ours and
    /// its candidate arcs join our pool. Taking `other` by value retires it;
    /// the merged fragment continues under this tree's identity.
    pub fn merge(&mut self, other: PartialTree, links: &mut DisjointSet) {
        links.link(other.root, self.root);
        self.arcs.absorb(other.arcs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_repoints_the_absorbed_root_and_pools_arcs() {
        let mut links = DisjointSet::make_singletons(2);
        let mut survivor = PartialTree::new(0);
        survivor.arcs().insert(Arc { v1: 0, v2: 1, weight: 4 });
        let mut absorbed = PartialTree::new(1);
        absorbed.arcs().insert(Arc { v1: 1, v2: 0, weight: 3 });

        survivor.merge(absorbed, &mut links);

        assert_eq!(links.find(1), 0);
        assert_eq!(survivor.root(), 0);
        assert_eq!(survivor.arc_count(), 2);
        assert_eq!(survivor.arcs().delete_min().unwrap().weight, 3);
    }

    #[test]
    fn merge_chains_keep_resolving_to_the_survivor() {
        let mut links = DisjointSet::make_singletons(3);
        let mut a = PartialTree::new(0);
        let b = PartialTree::new(1);
        a.merge(b, &mut links);
        let mut c = PartialTree::new(2);
        c.merge(a, &mut links);
        assert_eq!(links.find(0), 2);
        assert_eq!(links.find(1), 2);
    }
}
