/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::entry::Entry;
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::ops::Index;
use tracing::trace;

/// Creates a [`RedBlackTreeMap`](crate::RedBlackTreeMap) containing the given arguments:
///
/// ```
/// # use kvmaps::*;
/// #
/// let m = rbt_map![1 => "one", 2 => "two", 3 => "three"];
///
/// assert_eq!(m.get(&2), Some(&"two"));
/// assert_eq!(m.size(), 3);
/// ```
#[macro_export]
macro_rules! rbt_map {
    ($($k:expr => $v:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut m = $crate::RedBlackTreeMap::new();
            $(
                m.insert($k, $v);
            )*
            m
        }
    };
}

/// A mutable ordered map.  This implementation uses a
/// [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree).
///
/// Inserting a key that is already present does not replace the existing value: the tree
/// gains a second node with an equal key.  Lookups return the first node with an equal key
/// found on the search path from the root.
///
/// # Complexity
///
/// Let *n* be the number of elements in the map.
///
/// ## Temporal complexity
///
/// | Operation                  | Best case | Average   | Worst case  |
/// |:-------------------------- | ---------:| ---------:| -----------:|
/// | `new()`                    |      Θ(1) |      Θ(1) |        Θ(1) |
/// | `insert()`                 |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `get()`                    |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `contains_key()`           |      Θ(1) | Θ(log(n)) |   Θ(log(n)) |
/// | `size()`                   |      Θ(1) |      Θ(1) |        Θ(1) |
///
/// # Implementation details
///
/// Nodes live in an arena and refer to each other by index: every node knows its children
/// and its parent, so the insertion fixup can walk upwards without reference cycles.  Nodes
/// are never removed, which keeps every index valid for the life of the map.
///
/// After a new red leaf is attached the fixup is the classic bottom-up repair described in
/// "Introduction to Algorithms" (Cormen et al.), section 13.3: while the parent of the
/// current node is red, either recolor when the uncle is red, or rotate the current node into
/// an outer position and rotate the grandparent.
#[derive(Debug, Clone)]
pub struct RedBlackTreeMap<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Index of a node in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<K, V> {
    entry: Entry<K, V>,
    color: Color,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new_red(entry: Entry<K, V>, parent: Option<NodeId>) -> Node<K, V> {
        Node { entry, color: Color::Red, left: None, right: None, parent }
    }

    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<K, V> RedBlackTreeMap<K, V> {
    #[inline]
    fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    /// Absent children count as black leaves.
    fn color(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.node(id).color)
    }

    /// Makes `replacement` the child that `node` was in its parent, or the root.
    fn replace_in_parent(&mut self, node: NodeId, replacement: NodeId) {
        match self.node(node).parent {
            None => self.root = Some(replacement),
            Some(parent) => {
                let side = match self.node(parent).left == Some(node) {
                    true => Side::Left,
                    false => Side::Right,
                };

                *self.node_mut(parent).child_mut(side) = Some(replacement);
            }
        }
    }

    /// Moves `node` down towards `side`.  Its child on the opposite side takes its place and
    /// the inner grandchild changes parent, so the in-order sequence stays the same.
    ///
    /// ```text
    ///        ┏━━━┓                          ┏━━━┓
    ///        ┃ n ┃       rotate(n, Left)    ┃ p ┃
    ///        ┗━━━┛      ───────────────▶    ┗━━━┛
    ///         ╱ ╲                            ╱ ╲
    ///        a  ┏━━━┓                    ┏━━━┓  c
    ///           ┃ p ┃                    ┃ n ┃
    ///           ┗━━━┛                    ┗━━━┛
    ///            ╱ ╲                      ╱ ╲
    ///           b   c                    a   b
    /// ```
    fn rotate(&mut self, node: NodeId, side: Side) {
        let Some(pivot) = self.node(node).child(side.opposite()) else {
            return;
        };
        let inner = self.node(pivot).child(side);
        let parent = self.node(node).parent;

        *self.node_mut(node).child_mut(side.opposite()) = inner;

        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(node);
        }

        self.node_mut(pivot).parent = parent;
        self.replace_in_parent(node, pivot);

        *self.node_mut(pivot).child_mut(side) = Some(node);
        self.node_mut(node).parent = Some(pivot);

        trace!(rotation = ?side, size = self.size(), "rotated red-black tree node");
    }

    fn rotate_left(&mut self, node: NodeId) {
        self.rotate(node, Side::Left);
    }

    fn rotate_right(&mut self, node: NodeId) {
        self.rotate(node, Side::Right);
    }

    /// Rotates the outer subtree of `grandparent` up, so that `parent` replaces it.
    fn rotate_up(&mut self, grandparent: NodeId, parent_side: Side) {
        match parent_side {
            Side::Left => self.rotate_right(grandparent),
            Side::Right => self.rotate_left(grandparent),
        }
    }

    /// Restores the red-black properties after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, node: NodeId) {
        let mut current = node;

        while let Some(parent) = self.node(current).parent {
            if self.node(parent).color != Color::Red {
                break;
            }

            let Some(grandparent) = self.node(parent).parent else {
                break;
            };

            let parent_side = match self.node(grandparent).left == Some(parent) {
                true => Side::Left,
                false => Side::Right,
            };
            let uncle = self.node(grandparent).child(parent_side.opposite());

            if self.color(uncle) == Color::Red {
                self.node_mut(parent).color = Color::Black;
                if let Some(uncle) = uncle {
                    self.node_mut(uncle).color = Color::Black;
                }
                self.node_mut(grandparent).color = Color::Red;

                current = grandparent;
            } else {
                // An inner child is first rotated into the outer position, after which the
                // roles of `current` and `parent` are swapped.
                let (outer, outer_parent) =
                    match self.node(parent).child(parent_side.opposite()) == Some(current) {
                        true => {
                            self.rotate(parent, parent_side);
                            (parent, current)
                        }
                        false => (current, parent),
                    };

                self.node_mut(outer_parent).color = Color::Black;
                self.node_mut(grandparent).color = Color::Red;
                self.rotate_up(grandparent, parent_side);

                current = outer;
            }
        }

        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<K, V> RedBlackTreeMap<K, V>
where
    K: Ord,
{
    #[must_use]
    pub fn new() -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap { nodes: Vec::new(), root: None }
    }

    /// Walks down from the root.  A node whose key is neither greater nor less than `key` is
    /// the match, so with duplicate keys only the first one on the search path is reachable.
    fn find<Q: ?Sized>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = self.node(id);
            let node_key: &Q = node.entry.key.borrow();

            if key > node_key {
                cursor = node.right;
            } else if key < node_key {
                cursor = node.left;
            } else {
                return Some(id);
            }
        }

        None
    }

    #[must_use]
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.find(key).map(|id| &self.node(id).entry.value)
    }

    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.find(key).map(|id| &mut self.node_mut(id).entry.value)
    }

    #[must_use]
    pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.find(key).map(|id| {
            let entry = &self.node(id).entry;
            (&entry.key, &entry.value)
        })
    }

    /// Inserts a new node, even if the key is already present.  Keys that are not less than a
    /// node's key descend into its right subtree.
    pub fn insert(&mut self, key: K, value: V) {
        let mut attach_point: Option<(NodeId, Side)> = None;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let side = match key < self.node(id).entry.key {
                true => Side::Left,
                false => Side::Right,
            };

            attach_point = Some((id, side));
            cursor = self.node(id).child(side);
        }

        let id = NodeId(self.nodes.len());
        let parent = attach_point.map(|(parent, _)| parent);

        self.nodes.push(Node::new_red(Entry::new(key, value), parent));

        match attach_point {
            Some((parent, side)) => *self.node_mut(parent).child_mut(side) = Some(id),
            None => self.root = Some(id),
        }

        self.insert_fixup(id);
    }

    #[must_use]
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord,
    {
        self.find(key).is_some()
    }
}

impl<K, Q: ?Sized, V> Index<&Q> for RedBlackTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V> Default for RedBlackTreeMap<K, V>
where
    K: Ord,
{
    fn default() -> RedBlackTreeMap<K, V> {
        RedBlackTreeMap::new()
    }
}

impl<K, V> Extend<(K, V)> for RedBlackTreeMap<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, into_iter: I) {
        for (k, v) in into_iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RedBlackTreeMap<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(into_iter: I) -> RedBlackTreeMap<K, V> {
        let mut map = RedBlackTreeMap::new();

        map.extend(into_iter);

        map
    }
}
