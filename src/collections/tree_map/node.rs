// Tree nodes and the whole-tree walks that do not depend on key ordering.
// Every walk uses a heap work-list so chain-shaped trees cannot overflow the call stack.

pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single key-value entry of a [`TreeMap`](super::TreeMap), owning its left and right subtrees.
pub struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(super) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Shape building, only for tests.
#[cfg(any(test, feature = "testing"))]
impl<K, V> Node<K, V> {
    /// Sets the left subtree, replacing any existing one. Ordering is not checked.
    #[must_use]
    pub fn with_left(mut self, node: Node<K, V>) -> Self {
        dealloc(&mut self.left);
        self.left = Some(Box::new(node));
        self
    }

    /// Sets the right subtree, replacing any existing one. Ordering is not checked.
    #[must_use]
    pub fn with_right(mut self, node: Node<K, V>) -> Self {
        dealloc(&mut self.right);
        self.right = Some(Box::new(node));
        self
    }
}

/// Releases every node under `link`, leaving it empty.
pub(super) fn dealloc<K, V>(link: &mut Link<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Number of nodes on the longest root-to-leaf path.
pub(super) fn height<K, V>(link: &Link<K, V>) -> usize {
    let mut result = 0;
    let mut stack: Vec<(&Node<K, V>, usize)> = Vec::new();
    if let Some(root) = link {
        stack.push((&**root, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        result = result.max(depth);
        for child in [&node.left, &node.right].into_iter().flatten() {
            stack.push((&**child, depth + 1));
        }
    }
    result
}

/// Number of nodes reachable from `link`.
#[cfg(test)]
pub(super) fn count<K, V>(link: &Link<K, V>) -> usize {
    let mut n = 0;
    let mut stack = vec![link];
    while let Some(link) = stack.pop() {
        if let Some(node) = link {
            n += 1;
            stack.push(&node.left);
            stack.push(&node.right);
        }
    }
    n
}

/// Copies the tree under `src` into the empty `dst`, node for node, so the copy has the same shape.
pub(super) fn clone_into<K: Clone, V: Clone>(src: &Link<K, V>, dst: &mut Link<K, V>) {
    let mut stack: Vec<(&Node<K, V>, &mut Link<K, V>)> = Vec::new();
    if let Some(root) = src {
        stack.push((&**root, dst));
    }
    while let Some((node, slot)) = stack.pop() {
        let copy = slot.insert(Box::new(Node::new(node.key.clone(), node.value.clone())));
        let Node { left, right, .. } = &mut **copy;
        if let Some(l) = &node.left {
            stack.push((&**l, left));
        }
        if let Some(r) = &node.right {
            stack.push((&**r, right));
        }
    }
}

/// Pre-order search for a node whose value equals `target`.
pub(super) fn any_value<K, V: PartialEq>(link: &Link<K, V>, target: &V) -> bool {
    let mut stack = vec![link];
    while let Some(link) = stack.pop() {
        if let Some(node) = link {
            if node.value == *target {
                return true;
            }
            stack.push(&node.right);
            stack.push(&node.left);
        }
    }
    false
}
