//! A doubly linked list that flattens all its nodes onto a Vec for storage.
//! Nodes are addressed by their position in the Vec, so splicing one out is
//! just a matter of patching two indices.

/// Alias for the index of a node in the linked list's storage vec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeHandle(usize);

/// A node that lives in a linked list.
struct Node<T> {
    /// The value being stored. `None` once the slot has been freelisted.
    value: Option<T>,

    /// The index of the node previous to this one, closer to the head.
    prev: Option<NodeHandle>,

    /// The index of the next node in the list, closer to the tail.
    next: Option<NodeHandle>,
}

/// A single contiguous Vec of nodes with a freelist for removed slots. There
/// is no compaction; a slot given up by `remove_node` is handed back out by
/// the next `push_front`.
///
/// Unlike a textbook list this one only ever grows at the head. The back
/// links exist so that once a node has been located it can be spliced out
/// without walking the chain a second time to find its predecessor.
pub(crate) struct LinkedList<T> {
    /// The nodes in the list.
    store: Vec<Node<T>>,

    /// Entries in the list which aren't in use anymore. These will be reused.
    free: Vec<NodeHandle>,

    /// The first node in the list.
    head: Option<NodeHandle>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list. Nothing is allocated until the
    /// first push.
    pub(crate) fn new() -> Self {
        Self {
            store: Vec::new(),
            free: Vec::new(),
            head: None,
        }
    }

    /// The length of this linked list.
    pub(crate) fn len(&self) -> usize {
        self.store.len() - self.free.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Gets an element from the list.
    pub(crate) fn get(&self, node: NodeHandle) -> Option<&T> {
        self.store.get(node.0).and_then(|node| node.value.as_ref())
    }

    /// Gets a mutable element from the list.
    pub(crate) fn get_mut(&mut self, node: NodeHandle) -> Option<&mut T> {
        self.store.get_mut(node.0).and_then(|node| node.value.as_mut())
    }

    /// Pushes t onto the front of the list and returns a handle to the node.
    pub(crate) fn push_front(&mut self, t: T) -> NodeHandle {
        let n = Node {
            value: Some(t),
            prev: None,
            next: self.head,
        };

        // use the first available location in the storage vec, or infer what
        // the next location will be on push.
        let idx = self
            .free
            .pop()
            .unwrap_or_else(|| NodeHandle(self.store.len()));

        if let Some(head) = self.head {
            self.store[head.0].prev = Some(idx);
        }

        self.head = Some(idx);

        if self.store.len() <= idx.0 {
            self.store.push(n);
        } else {
            self.store[idx.0] = n;
        }

        idx
    }

    /// Remove an arbitrary node from the list, handing back its value.
    /// Returns None if the handle doesn't point at a live node.
    pub(crate) fn remove_node(&mut self, node: NodeHandle) -> Option<T> {
        let slot = self.store.get_mut(node.0)?;
        let value = slot.value.take()?;
        let prev = slot.prev.take();
        let next = slot.next.take();

        // link prev to next and next to prev so node doesn't exist in the
        // chain anymore
        match prev {
            Some(prev) => self.store[prev.0].next = next,
            None => self.head = next,
        }

        if let Some(next) = next {
            self.store[next.0].prev = prev;
        }

        self.free.push(node);

        Some(value)
    }

    /// Walks the list from head to tail.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            idx: self.head,
            list: self,
        }
    }

    /// Clears this linked list. Does not free the underlying buffers.
    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.free.clear();
        self.head = None;
    }
}

/// Head-to-tail iterator yielding each live node with its handle.
pub(crate) struct Iter<'a, T> {
    idx: Option<NodeHandle>,
    list: &'a LinkedList<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.idx?;
        let node = &self.list.store[handle.0];
        self.idx = node.next;
        node.value.as_ref().map(|value| (handle, value))
    }
}
