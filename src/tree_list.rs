use disjoint_set::DisjointSet;
use error::{MstError, MstResult};
use partial_tree::PartialTree;

struct Node {
    tree: PartialTree,
    next: usize,
}

/// Circular linked list of partial trees, addressed through a single rear
/// index whose `next` is the logical front. Nodes live in an arena with a
/// free list, so the cycle is index links rather than owned pointers; removal
/// is index unlinking.
pub struct PartialTreeList {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    rear: Option<usize>,
    size: usize,
}

impl PartialTreeList {
    pub fn new() -> PartialTreeList {
        PartialTreeList {
            nodes: Vec::new(),
            free: Vec::new(),
            rear: None,
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Inserts `tree` after the current rear; the new node becomes the rear,
    /// leaving the previous front unchanged.
    pub fn append(&mut self, tree: PartialTree) {
        let at = self.alloc(Node { tree, next: 0 });
        match self.rear {
            None => self.set_next(at, at),
            Some(rear) => {
                let front = self.next_of(rear);
                self.set_next(at, front);
                self.set_next(rear, at);
            }
        }
        self.rear = Some(at);
        self.size += 1;
    }

    /// Removes and returns the tree at the front of the list (rear's next).
    pub fn remove(&mut self) -> MstResult<PartialTree> {
        let rear = self.rear.ok_or(MstError::EmptyCollection)?;
        let front = self.next_of(rear);
        if front == rear {
            self.rear = None;
        } else {
            let after = self.next_of(front);
            self.set_next(rear, after);
        }
        Ok(self.release(front))
    }

    /// Scans one full circuit for the fragment whose root is the union-find
    /// root of `vertex`, unlinking and returning it. A clean miss is
    /// `Ok(None)`; only an empty list is an error.
    pub fn remove_tree_containing(
        &mut self,
        vertex: usize,
        links: &DisjointSet,
    ) -> MstResult<Option<PartialTree>> {
        let rear = self.rear.ok_or(MstError::EmptyCollection)?;
        let root = links.find(vertex);
        let mut at = rear;
        loop {
            if self.node(at).tree.root() == root {
                return Ok(Some(self.unlink(at)));
            }
            at = self.next_of(at);
            if at == rear {
                return Ok(None);
            }
        }
    }

    /// Lazy forward walk over the trees in circular order from the front.
    /// Not restartable, and the list must not be mutated while it is live.
    pub fn iter(&self) -> Iter {
        Iter {
            list: self,
            at: self.rear.map(|rear| self.next_of(rear)),
            rest: self.size,
        }
    }

    // Unlinks an arbitrary node from the ring. The predecessor is found by
    // walking the circle, as in any singly linked ring. Handles all three
    // shapes: single node, two nodes, three or more.
    fn unlink(&mut self, at: usize) -> PartialTree {
        let mut prev = at;
        while self.next_of(prev) != at {
            prev = self.next_of(prev);
        }
        let after = self.next_of(at);
        if prev == at {
            // only node in the ring
            self.rear = None;
        } else if prev == after {
            // two nodes: the survivor becomes a self-linked rear
            self.set_next(prev, prev);
            self.rear = Some(prev);
        } else {
            self.set_next(prev, after);
            if self.rear == Some(at) {
                self.rear = Some(prev);
            }
        }
        self.release(at)
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(at) => {
                self.nodes[at] = Some(node);
                at
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, at: usize) -> PartialTree {
        let node = self.nodes[at].take().expect("free slot in the ring");
        self.free.push(at);
        self.size -= 1;
        node.tree
    }

    fn node(&self, at: usize) -> &Node {
        self.nodes[at].as_ref().expect("free slot in the ring")
    }

    fn next_of(&self, at: usize) -> usize {
        self.node(at).next
    }

    fn set_next(&mut self, at: usize, next: usize) {
        self.nodes[at].as_mut().expect("free slot in the ring").next = next;
    }
}

pub struct Iter<'a> {
    list: &'a PartialTreeList,
    at: Option<usize>,
    rest: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PartialTree;

    fn next(&mut self) -> Option<&'a PartialTree> {
        if self.rest == 0 {
            return None;
        }
        let at = self.at?;
        let node = self.list.node(at);
        self.at = Some(node.next);
        self.rest -= 1;
        Some(&node.tree)
    }
}

impl<'a> IntoIterator for &'a PartialTreeList {
    type Item = &'a PartialTree;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
