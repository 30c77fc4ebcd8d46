/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::entry::Entry;
use crate::error::Error;
use crate::utils::DefaultBuildHasher;
use crate::List;
use std::borrow::Borrow;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::iter::FromIterator;
use std::mem;
use std::ops::Index;
use tracing::{debug, trace};

type HashValue = u64;

/// Number of buckets of a map created without an explicit bucket count.
pub const DEFAULT_BUCKET_COUNT: usize = 8;

/// Shrinking never takes the bucket count below this.
pub const MIN_BUCKET_COUNT: usize = 2;

/// Creates a [`ChainedHashMap`](crate::ChainedHashMap) containing the given arguments:
///
/// ```
/// # use kvmaps::*;
/// #
/// let m = ch_map!["one" => 1, "two" => 2];
///
/// assert_eq!(m.get("two"), Some(&2));
/// assert_eq!(m.size(), 2);
/// ```
#[macro_export]
macro_rules! ch_map {
    ($($k:expr => $v:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut m = $crate::ChainedHashMap::new();
            $(
                m.insert($k, $v);
            )*
            m
        }
    };
}

/// A mutable hash map with separate chaining.
///
/// Inserting a key that is already present appends a second entry for it.  Lookups and
/// removals act on the earliest inserted entry of a key that is still in the map.
///
/// # Complexity
///
/// Let *n* be the number of elements in the map.
///
/// ## Temporal complexity
///
/// | Operation                  | Average   | Worst case  |
/// |:-------------------------- | ---------:| -----------:|
/// | `new()`                    |      Θ(1) |        Θ(1) |
/// | `insert()`                 |      Θ(1) |        Θ(n) |
/// | `remove()`                 |      Θ(1) |        Θ(n) |
/// | `get()`                    |      Θ(1) |        Θ(n) |
/// | `contains_key()`           |      Θ(1) |        Θ(n) |
/// | `size()`                   |      Θ(1) |        Θ(1) |
/// | `bucket_count()`           |      Θ(1) |        Θ(1) |
///
/// # Implementation details
///
/// Every bucket is a [`List`] of entries, and an entry lives in the bucket given by its hash
/// modulo the current bucket count.  The map counts the buckets that hold at least one entry:
///
/// * After an insertion leaves no bucket empty the bucket count doubles.
/// * After a removal leaves fewer than half of the buckets in use the bucket count halves,
///   unless it is already [`MIN_BUCKET_COUNT`].
///
/// A resize moves every entry into a freshly allocated bucket array.  Entries keep the hash of
/// their key, so rehashing never calls `Hash` again.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V, H: BuildHasher = DefaultBuildHasher> {
    buckets: Vec<List<EntryWithHash<K, V>>>,
    used_buckets: usize,
    size: usize,
    hasher_builder: H,
}

#[derive(Debug, Clone)]
struct EntryWithHash<K, V> {
    entry: Entry<K, V>,
    key_hash: HashValue,
}

mod bucket_utils {
    use super::HashValue;
    use crate::List;
    use std::hash::{BuildHasher, Hash, Hasher};
    use std::iter;

    pub fn empty_buckets<T>(bucket_count: usize) -> Vec<List<T>> {
        iter::repeat_with(List::new).take(bucket_count).collect()
    }

    pub fn hash<T: ?Sized + Hash, H: BuildHasher>(v: &T, hasher_builder: &H) -> HashValue {
        let mut hasher = hasher_builder.build_hasher();

        v.hash(&mut hasher);

        hasher.finish()
    }

    /// Returns the bucket of a hash in a map with `bucket_count` buckets.
    #[allow(clippy::cast_possible_truncation)]
    pub fn index_from_hash(hash: HashValue, bucket_count: usize) -> usize {
        debug_assert!(bucket_count > 0);

        // The remainder is smaller than `bucket_count`, so it fits in a `usize`.
        (hash % bucket_count as HashValue) as usize
    }
}

impl<K, V> EntryWithHash<K, V>
where
    K: Eq + Hash,
{
    fn new<H: BuildHasher>(key: K, value: V, hash_builder: &H) -> EntryWithHash<K, V> {
        let key_hash = bucket_utils::hash(&key, hash_builder);

        EntryWithHash { entry: Entry::new(key, value), key_hash }
    }

    #[inline]
    fn matches<Q: ?Sized>(&self, key: &Q, key_hash: HashValue) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.key_hash == key_hash && self.entry.key.borrow() == key
    }
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    #[must_use]
    pub fn new() -> ChainedHashMap<K, V> {
        ChainedHashMap::new_with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty map with `bucket_count` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.  See [`ChainedHashMap::try_new_with_buckets`] for a
    /// version that reports the error instead.
    #[must_use]
    pub fn new_with_buckets(bucket_count: usize) -> ChainedHashMap<K, V> {
        ChainedHashMap::new_with_hasher_and_buckets(DefaultBuildHasher::default(), bucket_count)
    }

    pub fn try_new_with_buckets(bucket_count: usize) -> Result<ChainedHashMap<K, V>, Error> {
        ChainedHashMap::try_new_with_hasher_and_buckets(DefaultBuildHasher::default(), bucket_count)
    }
}

impl<K, V, H: BuildHasher> ChainedHashMap<K, V, H> {
    #[inline]
    fn bucket_index(&self, key_hash: HashValue) -> usize {
        bucket_utils::index_from_hash(key_hash, self.buckets.len())
    }

    /// Moves every entry into a new array of `new_bucket_count` buckets.  Within the old
    /// array buckets are visited in index order and each chain from head to tail.
    fn resize(&mut self, new_bucket_count: usize) {
        let old_bucket_count = self.buckets.len();
        let old_buckets =
            mem::replace(&mut self.buckets, bucket_utils::empty_buckets(new_bucket_count));

        for mut bucket in old_buckets {
            while let Some(entry) = bucket.pop_front() {
                let index = bucket_utils::index_from_hash(entry.key_hash, new_bucket_count);

                self.buckets[index].push_back(entry);
            }
        }

        self.used_buckets = self.buckets.iter().filter(|bucket| !bucket.is_empty()).count();

        debug!(
            from = old_bucket_count,
            to = new_bucket_count,
            entries = self.size,
            used_buckets = self.used_buckets,
            "resized chained hash map"
        );
    }

    #[must_use]
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets holding at least one entry.
    #[must_use]
    #[inline]
    pub fn used_buckets(&self) -> usize {
        self.used_buckets
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher_builder
    }
}

impl<K, V, H: BuildHasher> ChainedHashMap<K, V, H>
where
    K: Eq + Hash,
{
    #[must_use]
    pub fn new_with_hasher(hasher_builder: H) -> ChainedHashMap<K, V, H> {
        ChainedHashMap::new_with_hasher_and_buckets(hasher_builder, DEFAULT_BUCKET_COUNT)
    }

    #[must_use]
    pub fn new_with_hasher_and_buckets(
        hasher_builder: H,
        bucket_count: usize,
    ) -> ChainedHashMap<K, V, H> {
        assert!(bucket_count > 0, "bucket count must be positive");

        ChainedHashMap {
            buckets: bucket_utils::empty_buckets(bucket_count),
            used_buckets: 0,
            size: 0,
            hasher_builder,
        }
    }

    pub fn try_new_with_hasher_and_buckets(
        hasher_builder: H,
        bucket_count: usize,
    ) -> Result<ChainedHashMap<K, V, H>, Error> {
        match bucket_count {
            0 => Err(Error::InvalidBucketCount { bucket_count }),
            _ => Ok(ChainedHashMap::new_with_hasher_and_buckets(hasher_builder, bucket_count)),
        }
    }

    fn find<Q: ?Sized>(&self, key: &Q) -> Option<&EntryWithHash<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let key_hash = bucket_utils::hash(key, &self.hasher_builder);

        self.buckets[self.bucket_index(key_hash)].find_first(|e| e.matches(key, key_hash))
    }

    #[must_use]
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.find(key).map(|e| &e.entry.value)
    }

    #[must_use]
    pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.find(key).map(|e| (&e.entry.key, &e.entry.value))
    }

    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let key_hash = bucket_utils::hash(key, &self.hasher_builder);
        let index = self.bucket_index(key_hash);

        self.buckets[index].find_first_mut(|e| e.matches(key, key_hash)).map(|e| &mut e.entry.value)
    }

    /// Appends the entry to the chain of its bucket, even if the key is already present.
    pub fn insert(&mut self, key: K, value: V) {
        let entry = EntryWithHash::new(key, value, &self.hasher_builder);
        let index = self.bucket_index(entry.key_hash);
        let bucket = &mut self.buckets[index];

        if bucket.is_empty() {
            self.used_buckets += 1;
        }

        bucket.push_back(entry);
        self.size += 1;

        if self.used_buckets == self.bucket_count() {
            self.resize(2 * self.bucket_count());
        }
    }

    /// Removes the earliest inserted entry of `key` and returns its value.  Removing a key
    /// that is not present leaves the map untouched.
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let key_hash = bucket_utils::hash(key, &self.hasher_builder);
        let index = self.bucket_index(key_hash);
        let bucket = &mut self.buckets[index];
        let removed = bucket.remove_first(|e| e.matches(key, key_hash))?;

        if bucket.is_empty() {
            self.used_buckets -= 1;
        }

        self.size -= 1;

        trace!(bucket = index, size = self.size, "removed entry from chained hash map");

        let bucket_count = self.bucket_count();

        if bucket_count > MIN_BUCKET_COUNT && self.used_buckets < bucket_count / 2 {
            self.resize((bucket_count / 2).max(MIN_BUCKET_COUNT));
        }

        Some(removed.entry.value)
    }

    #[must_use]
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.find(key).is_some()
    }
}

impl<K, Q: ?Sized, V, H: BuildHasher> Index<&Q> for ChainedHashMap<K, V, H>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Hash + Eq,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, H> Default for ChainedHashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    fn default() -> ChainedHashMap<K, V, H> {
        ChainedHashMap::new_with_hasher(H::default())
    }
}

impl<K, V, H> Extend<(K, V)> for ChainedHashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, into_iter: I) {
        for (k, v) in into_iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, H> FromIterator<(K, V)> for ChainedHashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(into_iter: I) -> ChainedHashMap<K, V, H> {
        let mut map = ChainedHashMap::new_with_hasher(H::default());

        map.extend(into_iter);

        map
    }
}
