#[macro_use] extern crate log;
extern crate serde_json;

#[cfg(test)]
extern crate pathfinding;
#[cfg(test)]
extern crate rand;

mod graph;
mod disjoint_set;
mod arc_heap;
mod partial_tree;
mod tree_list;
mod mst;
mod error;

pub use graph::{Graph, Neighbor};
pub use disjoint_set::DisjointSet;
pub use arc_heap::{Arc, ArcHeap};
pub use partial_tree::PartialTree;
pub use tree_list::PartialTreeList;
pub use mst::{initialize, execute, minimum_spanning_tree};
pub use error::{MstError, MstResult};
