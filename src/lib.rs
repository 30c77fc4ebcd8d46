/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

// Note: Keep this in sync with `README.md`.  Note that the doc links must be removed.
//! # Key-value maps
//!
//! Mutable in-memory maps with simple, predictable behavior.
//!
//! # Data Structures
//!
//! This crate implements the following data structures:
//!
//!   1. [`RedBlackTreeMap`](#redblacktreemap)
//!   2. [`ChainedHashMap`](#chainedhashmap)
//!   3. [`List`](#list)
//!
//! Neither map replaces the value of a key that is inserted again: the new pair is stored next
//! to the old one.  [`ChainedHashMap`] lookups return the earliest inserted pair that is still
//! present.  [`RedBlackTreeMap`] lookups return the first equal node on the search path from the
//! root, and rebalancing can move a newer pair there, so it is not necessarily the oldest one.
//!
//! ## `RedBlackTreeMap`
//! [![RedBlackTreeMap documentation](https://img.shields.io/badge/doc-RedBlackTreeMap-303070.svg)](map/red_black_tree_map/struct.RedBlackTreeMap.html)
//!
//! An ordered map implemented with a
//! [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree).
//!
//! ### Example
//!
//! ```rust
//! use kvmaps::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::new();
//!
//! map.insert(5, "Test");
//! map.insert(2, "Test2");
//! map.insert(7, "Test3");
//!
//! assert_eq!(map.get(&2), Some(&"Test2"));
//! assert!(!map.contains_key(&99));
//! ```
//!
//! ## `ChainedHashMap`
//! [![ChainedHashMap documentation](https://img.shields.io/badge/doc-ChainedHashMap-303070.svg)](map/chained_hash_map/struct.ChainedHashMap.html)
//!
//! A hash map with separate chaining.  The bucket count doubles when every bucket is in use and
//! halves when fewer than half of them are.
//!
//! ### Example
//!
//! ```rust
//! use kvmaps::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new_with_buckets(2);
//!
//! map.insert("Test", 5);
//!
//! assert_eq!(map.get("Test"), Some(&5));
//! assert_eq!(map.get("Other"), None);
//!
//! assert_eq!(map.remove("Test"), Some(5));
//! assert!(map.is_empty());
//! ```
//!
//! ### Custom hasher
//!
//! Keys are hashed with a [`SeededState`], which draws a random seed when the map is created.
//! Pin the seed to get the same bucket layout on every run:
//!
//! ```rust
//! use kvmaps::{ChainedHashMap, SeededState};
//!
//! let mut map = ChainedHashMap::new_with_hasher(SeededState::with_seed(42));
//!
//! map.insert(1, "one");
//!
//! assert_eq!(map.hasher().seed(), 42);
//! ```
//!
//! ## `List`
//! [![List documentation](https://img.shields.io/badge/doc-List-303070.svg)](sequence/list/struct.List.html)
//!
//! A singly linked list, used as the bucket storage of [`ChainedHashMap`].
//!
//! ### Example
//!
//! ```rust
//! use kvmaps::List;
//!
//! let mut list = List::new();
//!
//! list.push_back("a");
//! list.push_back("b");
//!
//! assert_eq!(list.find_first(|v| *v == "b"), Some(&"b"));
//! assert_eq!(list.remove_first(|v| *v == "a"), Some("a"));
//! assert_eq!(list.first(), Some(&"b"));
//! ```
//!
//! # Logging
//!
//! Resizes of [`ChainedHashMap`] are reported as `tracing` events at the `DEBUG` level;
//! removals and tree rotations at the `TRACE` level.  No subscriber is installed by this crate.

pub mod error;
pub mod map;
pub mod sequence;
pub mod utils;

pub use error::Error;
pub use map::chained_hash_map::ChainedHashMap;
pub use map::entry::Entry;
pub use map::red_black_tree_map::RedBlackTreeMap;
pub use sequence::list::List;
pub use utils::SeededState;
