/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::Error;
use std::fmt::Display;
use std::iter::FromIterator;

/// Creates a [`List`](crate::List) containing the given arguments:
///
/// ```
/// # use kvmaps::*;
/// #
/// let mut l = List::new();
/// l.push_back(1);
/// l.push_back(2);
/// l.push_back(3);
///
/// assert_eq!(list![1, 2, 3], l);
/// ```
#[macro_export]
macro_rules! list {
    ($($e:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut l = $crate::List::new();
            $(
                l.push_back($e);
            )*
            l
        }
    };
}

/// A mutable singly linked list.
///
/// # Complexity
///
/// Let *n* be the number of elements in the list.
///
/// ## Temporal complexity
///
/// | Operation         | Average | Worst case  |
/// |:----------------- | -------:| -----------:|
/// | `new()`           |    Θ(1) |        Θ(1) |
/// | `push_front()`    |    Θ(1) |        Θ(1) |
/// | `push_back()`     |    Θ(n) |        Θ(n) |
/// | `pop_front()`     |    Θ(1) |        Θ(1) |
/// | `remove_first()`  |    Θ(n) |        Θ(n) |
/// | `find_first()`    |    Θ(n) |        Θ(n) |
/// | `first()`         |    Θ(1) |        Θ(1) |
/// | `last()`          |    Θ(n) |        Θ(n) |
/// | `get()`           |    Θ(n) |        Θ(n) |
/// | `insert_at()`     |    Θ(n) |        Θ(n) |
/// | `len()`           |    Θ(1) |        Θ(1) |
/// | iterator step     |    Θ(1) |        Θ(1) |
/// | iterator full     |    Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// Every node owns the next one through a `Box`.  The list is the storage of the buckets of
/// [`ChainedHashMap`](crate::ChainedHashMap), where chains stay short, so appending walks the
/// chain instead of keeping a tail pointer.
#[derive(Debug)]
pub struct List<T> {
    head: Option<Box<Node<T>>>,
    length: usize,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> List<T> {
    #[must_use]
    pub fn new() -> List<T> {
        List { head: None, length: 0 }
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns the element at position `index`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.iter().nth(index).ok_or(Error::IndexOutOfBounds { index, len: self.length })
    }

    pub fn push_front(&mut self, value: T) {
        let new_head = Node { value, next: self.head.take() };

        self.head = Some(Box::new(new_head));
        self.length += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;

        while let Some(node) = link {
            link = &mut node.next;
        }

        *link = Some(Box::new(Node { value, next: None }));
        self.length += 1;
    }

    /// Inserts `value` so that it ends up at position `index`, shifting the element previously
    /// there one position forward.  The index must refer to an existing element.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), Error> {
        let out_of_bounds = Error::IndexOutOfBounds { index, len: self.length };

        if index >= self.length {
            return Err(out_of_bounds);
        }

        let link = self.link_mut(index).ok_or(out_of_bounds)?;
        let next = link.take();

        *link = Some(Box::new(Node { value, next }));
        self.length += 1;

        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.length -= 1;

            node.value
        })
    }

    /// Removes the first element that satisfies `predicate` and returns it.  The relative order
    /// of the remaining elements is preserved.
    pub fn remove_first<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let position = self.iter().position(predicate)?;
        let link = self.link_mut(position)?;
        let mut node = link.take()?;

        *link = node.next.take();
        self.length -= 1;

        Some(node.value)
    }

    #[must_use]
    pub fn find_first<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|v| predicate(v))
    }

    pub fn find_first_mut<F>(&mut self, mut predicate: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head.as_deref_mut();

        while let Some(node) = current {
            if predicate(&node.value) {
                return Some(&mut node.value);
            }

            current = node.next.as_deref_mut();
        }

        None
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns the link that holds the node at position `index`, or the empty link after the
    /// last node if `index == len()`.
    fn link_mut(&mut self, index: usize) -> Option<&mut Option<Box<Node<T>>>> {
        let mut link = &mut self.head;

        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }

        Some(link)
    }
}

impl<T> Default for List<T> {
    fn default() -> List<T> {
        List::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> List<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &List<T>) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Display> Display for List<T> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;

        fmt.write_str("[")?;

        for v in self {
            if !first {
                fmt.write_str(", ")?;
            }
            v.fmt(fmt)?;
            first = false;
        }

        fmt.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> List<T> {
        let mut vec: Vec<T> = into_iter.into_iter().collect();
        let mut list: List<T> = List::new();

        while let Some(e) = vec.pop() {
            list.push_front(e);
        }

        list
    }
}

// Drop the list iteratively to prevent stack overflow.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();

        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

/// Forward-only cursor over a [`List`].  Once the end is reached `next()` keeps returning
/// `None`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    length: usize,
}

impl<T> Iter<'_, T> {
    fn new(list: &List<T>) -> Iter<'_, T> {
        Iter { next: list.head.as_deref(), length: list.len() }
    }

    /// Whether a call to `next()` would yield an element.
    #[must_use]
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.length -= 1;

            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.length, Some(self.length))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod test;
