//! [`TreeMap`], an ordered map stored in an unbalanced binary search tree.
//!
//! # Differences compared to [`std::collections::BTreeMap`]
//!
//! The tree is never rebalanced, so its shape is whatever the insertion order produces and
//! inserting keys in ascending order gives a chain. All walks over the tree are iterative,
//! so such chains cost time but never overflow the stack.
//!
//! Keys are ordered by a [`Comparator`] type parameter, [`Natural`] by default. A comparator
//! may decline to order two keys ( [`Partial`] does for `NaN` ), so operations that compare keys
//! return a [`Result`].
//!
//! Removal of keys is not supported, [`TreeMap::remove`] always fails.
//!
//! # Example
//!
//! ```
//!     use bstmap::collections::TreeMap;
//!     let mut mymap = TreeMap::new();
//!     mymap.insert("England", "London").unwrap();
//!     mymap.insert("France", "Paris").unwrap();
//!     println!("The capital of France is {}", mymap.get(&"France").unwrap().unwrap());
//! ```

use std::{
    cmp::Ordering,
    collections::HashSet,
    fmt,
    fmt::Debug,
    hash::Hash,
    iter::FusedIterator,
};

use super::MapError;

mod node;
pub use node::Node;
use node::Link;

/// Ordered map backed by an unbalanced binary search tree.
///
/// General guide to implementation:
///
/// [`TreeMap`] has a length, an optional root [`Node`] and a [`Comparator`]. Each node owns its
/// left and right subtrees. For every node, keys in the left subtree compare less and keys in
/// the right subtree compare greater.
///
/// The map is not synchronised. Sharing it between threads needs a lock supplied by the caller.
pub struct TreeMap<K, V, C = Natural> {
    len: usize,
    root: Link<K, V>,
    cmp: C,
}

impl<K, V> Default for TreeMap<K, V> {
    /// Creates an empty TreeMap.
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Drop for TreeMap<K, V, C> {
    fn drop(&mut self) {
        node::dealloc(&mut self.root);
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for TreeMap<K, V, C> {
    /// The clone has the same shape as the original.
    fn clone(&self) -> Self {
        let mut result = Self {
            len: self.len,
            root: None,
            cmp: self.cmp.clone(),
        };
        node::clone_into(&self.root, &mut result.root);
        result
    }
}

impl<K, V> TreeMap<K, V> {
    /// Returns a new, empty map using the natural ordering of `K`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns a new, empty map ordered by `cmp`.
    ///
    /// # Example
    ///
    /// ```
    ///     use bstmap::collections::{Natural, Reverse, TreeMap};
    ///     let mut map = TreeMap::with_comparator(Reverse(Natural));
    ///     map.insert(1, "one").unwrap();
    ///     map.insert(2, "two").unwrap();
    ///     assert_eq!(map.key_set(), [&2, &1]);
    /// ```
    #[must_use]
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            len: 0,
            root: None,
            cmp,
        }
    }

    /// The comparator that orders the keys.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Clear the map.
    pub fn clear(&mut self) {
        self.len = 0;
        node::dealloc(&mut self.root);
    }

    /// Get number of key-value pairs in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the map empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest path from the root, 0 for an empty map.
    ///
    /// Diagnostic, shows how far insertion order has unbalanced the tree.
    #[must_use]
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Iterate over the key-value pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }

    /// Iterate over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// All keys in ascending order.
    #[must_use]
    pub fn key_set(&self) -> Vec<&K> {
        self.keys().collect()
    }

    /// The set of distinct values, in no particular order.
    ///
    /// Keys that map to equal values contribute a single element, so the result can be smaller
    /// than [`len`](Self::len).
    ///
    /// # Example
    ///
    /// ```
    ///     use bstmap::collections::TreeMap;
    ///     let map = TreeMap::from([("a", 1), ("b", 1), ("c", 2)]);
    ///     assert_eq!(map.values().len(), 2);
    /// ```
    #[must_use]
    pub fn values(&self) -> HashSet<&V>
    where
        V: Eq + Hash,
    {
        let mut set = HashSet::new();
        let mut stack = vec![&self.root];
        while let Some(link) = stack.pop() {
            let Some(node) = link else { continue };
            set.insert(&node.value);
            stack.push(&node.left);
            stack.push(&node.right);
        }
        set
    }

    /// Does any key map to a value equal to `value`?
    ///
    /// Every node may be visited. Use `V = Option<T>` to store absent values; `None` then only
    /// matches `None`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        node::any_value(&self.root, value)
    }

    /// Removing keys is not supported, always returns an `Unsupported` error.
    pub fn remove(&mut self, _key: &K) -> Result<Option<V>, MapError> {
        Err(MapError::unsupported("remove"))
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    #[cfg(test)]
    pub(crate) fn check(&self) {
        assert_eq!(node::count(&self.root), self.len, "len does not match node count");
        // Each node is checked against the tightest bounds inherited from its ancestors.
        let mut stack: Vec<(&Node<K, V>, Option<&K>, Option<&K>)> = Vec::new();
        if let Some(root) = &self.root {
            stack.push((&**root, None, None));
        }
        while let Some((node, lo, hi)) = stack.pop() {
            if let Some(lo) = lo {
                assert_eq!(self.cmp.compare(lo, &node.key), Some(Ordering::Less));
            }
            if let Some(hi) = hi {
                assert_eq!(self.cmp.compare(&node.key, hi), Some(Ordering::Less));
            }
            if let Some(l) = &node.left {
                stack.push((&**l, lo, Some(&node.key)));
            }
            if let Some(r) = &node.right {
                stack.push((&**r, Some(&node.key), hi));
            }
        }
    }

    /// Insert key-value pair into map, or if key is already in map, replaces value and returns old value.
    ///
    /// Fails with `Incomparable` if the comparator cannot order `key` against a stored key,
    /// in which case the map is unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        let cmp = &self.cmp;
        let mut link = &mut self.root;
        if link.is_none() && order(cmp, &key, &key)? != Ordering::Equal {
            return Err(MapError::incomparable());
        }
        while let Some(node) = link {
            link = match order(cmp, &key, &node.key)? {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Ok(Some(std::mem::replace(&mut node.value, value))),
            };
        }
        *link = Some(Box::new(Node::new(key, value)));
        self.len += 1;
        Ok(None)
    }

    /// Insert every pair from `entries`, in iteration order.
    ///
    /// Stops at the first failure; pairs inserted before it remain in the map.
    pub fn put_all<I>(&mut self, entries: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Get reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Result<Option<&V>, MapError> {
        Ok(self.find_node(key)?.map(|node| &node.value))
    }

    /// Does the map have an entry for the specified key.
    pub fn contains_key(&self, key: &K) -> Result<bool, MapError> {
        Ok(self.find_node(key)?.is_some())
    }

    /// Find the node holding `target`, descending from the root one comparison per level.
    pub(crate) fn find_node(&self, target: &K) -> Result<Option<&Node<K, V>>, MapError> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match order(&self.cmp, target, &node.key)? {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Ok(Some(&**node)),
            };
        }
        Ok(None)
    }
}

/// Escape hatches for building trees of a known shape. Not for production use.
#[cfg(any(test, feature = "testing"))]
impl<K, V, C> TreeMap<K, V, C> {
    /// Makes a detached node, to be assembled with [`Node::with_left`] and [`Node::with_right`].
    pub fn make_node(&self, key: K, value: V) -> Node<K, V> {
        Node::new(key, value)
    }

    /// Replaces the tree with `root` and sets the length to `len`, without checking either.
    pub fn set_tree(&mut self, root: Option<Node<K, V>>, len: usize) {
        node::dealloc(&mut self.root);
        self.root = root.map(Box::new);
        self.len = len;
    }
}

fn order<K, C: Comparator<K>>(cmp: &C, a: &K, b: &K) -> Result<Ordering, MapError> {
    cmp.compare(a, b).ok_or_else(MapError::incomparable)
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &TreeMap<K, V, C>) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}
impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> TreeMap<K, V> {
        let mut map = TreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> TreeMap<K, V> {
        TreeMap::from_iter(arr)
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            // Natural order is total, insert cannot fail.
            let _ = self.insert(key, value);
        }
    }
}

impl<K: Debug, V: Debug, C> Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Ordering.

/// Orders the keys of a [`TreeMap`].
///
/// `None` means the two keys cannot be ordered; operations that meet such a pair fail with
/// `Incomparable`. For a well-formed map the comparator must be a strict total order on the keys
/// actually stored.
pub trait Comparator<K> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;
}

/// Ordering by [`Ord`], never fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord> Comparator<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

/// Ordering by [`PartialOrd`], for keys such as `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Partial;

impl<K: PartialOrd> Comparator<K> for Partial {
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Reverses another comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<K, C: Comparator<K>> Comparator<K> for Reverse<C> {
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        self.0.compare(a, b).map(Ordering::reverse)
    }
}

// Iteration.

/// Iterator returned by [`TreeMap::iter`].
pub struct Iter<'a, K, V> {
    len: usize,
    stack: Vec<&'a Node<K, V>>,
}
impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: &'a Link<K, V>, len: usize) -> Self {
        let mut result = Self {
            len,
            stack: Vec::new(),
        };
        result.push_left(root);
        result
    }

    // Stack holds the nodes whose left subtree is done but which are not yet returned.
    fn push_left(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link {
            self.stack.push(&**node);
            link = &node.left;
        }
    }
}
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            stack: self.stack.clone(),
        }
    }
}
impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        self.len = self.len.saturating_sub(1);
        Some((&node.key, &node.value))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}
impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Iterator returned by [`TreeMap::keys`].
pub struct Keys<'a, K, V>(Iter<'a, K, V>);
impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

// Tests.

#[cfg(all(test, not(miri), feature = "cap"))]
#[global_allocator]
static ALLOCATOR: cap::Cap<std::alloc::System> =
    cap::Cap::new(std::alloc::System, usize::max_value());

#[cfg(test)]
fn print_memory() {
    #[cfg(all(test, not(miri), feature = "cap"))]
    println!("Memory allocated: {} bytes", ALLOCATOR.allocated());
}

/* mimalloc cannot be used with miri */
#[cfg(all(test, not(miri), not(feature = "cap")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(test)]
mod mytests;
