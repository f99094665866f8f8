use arc_heap::Arc;
use disjoint_set::DisjointSet;
use error::{MstError, MstResult};
use graph::Graph;
use partial_tree::PartialTree;
use tree_list::PartialTreeList;

/// Builds the starting state: one singleton partial tree per vertex, seeded
/// with that vertex's incident arcs. Each undirected edge lands in both
/// endpoints' heaps; the stale copy is filtered out later by the root check
/// in the selection loop, not here.
pub fn initialize(graph: &Graph) -> (PartialTreeList, DisjointSet) {
    let mut list = PartialTreeList::new();
    let links = DisjointSet::make_singletons(graph.vertex_count());
    for v in 0..graph.vertex_count() {
        let mut tree = PartialTree::new(v);
        for neighbor in graph.neighbors(v) {
            tree.arcs().insert(Arc {
                v1: v,
                v2: neighbor.vertex,
                weight: neighbor.weight,
            });
        }
        list.append(tree);
    }
    (list, links)
}

/// Runs the selection loop until a single fragment remains, returning the
/// chosen arcs. Each pass takes the front fragment, pops its cheapest arcs
/// until one reaches a different fragment, merges the two, and re-appends the
/// survivor. A fragment that runs out of arcs while others remain means the
/// graph has no spanning tree, which is reported rather than returned as a
/// partial edge set.
pub fn execute(list: &mut PartialTreeList, links: &mut DisjointSet) -> MstResult<Vec<Arc>> {
    let mut mst = Vec::new();
    while list.size() > 1 {
        let mut ptx = list.remove()?;
        let mut chosen = None;
        while let Some(arc) = ptx.arcs().delete_min() {
            // ptx itself is off the list, so an endpoint inside ptx misses
            let pty = match list.remove_tree_containing(arc.v1, links)? {
                Some(tree) => Some(tree),
                None => list.remove_tree_containing(arc.v2, links)?,
            };
            if let Some(pty) = pty {
                debug!(
                    "merge: root {} absorbs root {} via arc {}-{} ({})",
                    ptx.root(),
                    pty.root(),
                    arc.v1,
                    arc.v2,
                    arc.weight
                );
                ptx.merge(pty, links);
                chosen = Some(arc);
                break;
            }
            // both endpoints already inside ptx: redundant arc, drop it
        }
        match chosen {
            Some(arc) => {
                mst.push(arc);
                list.append(ptx);
            }
            None => {
                return Err(MstError::Disconnected {
                    found: mst.len(),
                    expected: links.len() - 1,
                });
            }
        }
    }
    Ok(mst)
}

/// Computes the MST arcs for `graph`. The order of the returned arcs is not
/// significant; for a connected graph there are exactly V - 1 of them.
pub fn minimum_spanning_tree(graph: &Graph) -> MstResult<Vec<Arc>> {
    let (mut list, mut links) = initialize(graph);
    execute(&mut list, &mut links)
}
