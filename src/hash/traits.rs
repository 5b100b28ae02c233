use alloc::collections::BTreeSet;
use core::hash::{BuildHasher, Hash};

use hashbrown::HashSet;

/// A trait defining the operations shared by every fixed-capacity table.
///
/// Implementations differ only in how collisions are resolved. None of the
/// operations report failure: removing or searching for an absent value is a
/// no-op, and inserting a value that is already present leaves the table
/// untouched.
pub trait Table<T> {
    /// Insert a value into the table.
    ///
    /// Does nothing if an equal value is already stored. Implementations with
    /// a hard slot limit drop the value silently when no slot is left; use
    /// [`Table::search`] afterwards to find out whether it landed.
    fn insert(&mut self, value: T);

    /// Remove a value from the table if an equal one is stored.
    fn remove(&mut self, value: &T);

    /// Check whether an equal value is stored in the table.
    fn search(&self, value: &T) -> bool;

    /// Replace `old` with `new`.
    ///
    /// Only acts when `old` is present: `new` is never inserted on its own.
    fn change(&mut self, old: &T, new: T) {
        if self.search(old) {
            self.remove(old);
            self.insert(new);
        }
    }

    /// Get the number of values currently stored.
    fn len(&self) -> usize;

    /// Check if the table holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the fixed number of slots or buckets the table was built with.
    fn capacity(&self) -> usize;
}

/// A set living in a single chaining bucket.
///
/// Buckets have no capacity limit and never hold two equal values.
pub trait Bucket<T>: Default {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Check if the bucket holds a value equal to `value`.
    fn contains(&self, value: &T) -> bool;

    /// Add a value, returning `false` if an equal one was already there.
    fn insert(&mut self, value: T) -> bool;

    /// Erase a value, returning `true` if it was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Get the number of values in the bucket.
    fn len(&self) -> usize;

    /// Check if the bucket holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Erase every value in the bucket.
    fn clear(&mut self);

    /// Iterate over the values in the bucket, in the set's own order.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<T: Ord> Bucket<T> for BTreeSet<T> {
    type Iter<'a>
        = alloc::collections::btree_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    #[inline]
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}

impl<T, S> Bucket<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Iter<'a>
        = hashbrown::hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    #[inline]
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}
