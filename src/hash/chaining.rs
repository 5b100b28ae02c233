//! Separate chaining over per-bucket sets.
//!
//! Each of the `N` buckets owns an unbounded set, so a bucket never runs out
//! of room no matter how many values collide on it. The choice of set only
//! changes lookup cost inside a bucket:
//!
//! - [`OrderedChainTable`] keeps each bucket in a `BTreeSet` (`O(log k)`).
//! - [`HashedChainTable`] keeps each bucket in a hashbrown `HashSet` (`O(1)` expected).
use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;

use hashbrown::{DefaultHashBuilder, HashSet};
use log::{debug, trace};

use super::traits::{Bucket, Table};

/// Chaining table whose buckets are ordered sets.
pub type OrderedChainTable<T, const N: usize> = BucketSetTable<T, BTreeSet<T>, N>;

/// Chaining table whose buckets are hashed sets.
pub type HashedChainTable<T, const N: usize> = BucketSetTable<T, HashSet<T>, N>;

/// A fixed number of buckets, each holding a set of colliding values.
///
/// # Type Parameters
/// * `T` - The element type
/// * `B` - The set used for every bucket
/// * `N` - The number of buckets, fixed for the lifetime of the table
/// * `S` - The hash builder picking a bucket for each value
pub struct BucketSetTable<T, B, const N: usize, S = DefaultHashBuilder> {
    buckets: Box<[B]>,
    len: usize,
    hash_builder: S,
    _marker: PhantomData<T>,
}

impl<T, B, const N: usize> Default for BucketSetTable<T, B, N>
where
    T: Eq + Hash,
    B: Bucket<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B, const N: usize> BucketSetTable<T, B, N>
where
    T: Eq + Hash,
    B: Bucket<T>,
{
    /// Create a table of `N` empty buckets using the default hash builder.
    ///
    /// # Panics
    /// Panics if `N` is zero
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<T, B, const N: usize, S> BucketSetTable<T, B, N, S>
where
    T: Eq + Hash,
    B: Bucket<T>,
    S: BuildHasher,
{
    /// Create a table of `N` empty buckets hashing values with `hash_builder`.
    ///
    /// # Panics
    /// Panics if `N` is zero
    pub fn with_hasher(hash_builder: S) -> Self {
        assert!(N > 0, "capacity must be non-zero");
        debug!("creating chaining table with {} buckets", N);
        let mut buckets = Vec::with_capacity(N);
        buckets.resize_with(N, B::default);
        Self {
            buckets: buckets.into_boxed_slice(),
            len: 0,
            hash_builder,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn address(&self, value: &T) -> usize {
        (self.hash_builder.hash_one(value) % N as u64) as usize
    }
}

impl<T, B, const N: usize, S> BucketSetTable<T, B, N, S>
where
    B: Bucket<T>,
{
    /// Get the number of values stored in the bucket at `index`.
    ///
    /// # Panics
    /// Panics if `index >= N`
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    /// Iterate over the stored values, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Empty every bucket. The buckets themselves stay allocated.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(B::clear);
        self.len = 0;
    }
}

impl<T, B, const N: usize, S> Table<T> for BucketSetTable<T, B, N, S>
where
    T: Eq + Hash,
    B: Bucket<T>,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) {
        if self.search(&value) {
            return;
        }
        let address = self.address(&value);
        if self.buckets[address].insert(value) {
            self.len += 1;
            trace!("added value to bucket {}", address);
        }
    }

    fn remove(&mut self, value: &T) {
        let address = self.address(value);
        if self.buckets[address].remove(value) {
            self.len -= 1;
            trace!("erased value from bucket {}", address);
        }
    }

    fn search(&self, value: &T) -> bool {
        self.buckets[self.address(value)].contains(value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        N
    }
}

impl<T, B, const N: usize, S> Extend<T> for BucketSetTable<T, B, N, S>
where
    T: Eq + Hash,
    B: Bucket<T>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.insert(value));
    }
}

impl<T, B, const N: usize, S> Debug for BucketSetTable<T, B, N, S>
where
    T: Debug,
    B: Bucket<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
