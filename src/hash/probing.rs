//! Open addressing with linear probing.
//!
//! Every value lives directly in one of `N` slots. A value whose home slot is
//! taken walks forward, wrapping around, until it finds a slot that is not
//! occupied. Removal leaves a tombstone behind so that values which probed
//! past the removed one can still be found.
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};

use hashbrown::DefaultHashBuilder;
use log::{debug, trace};

use super::error::InsertError;
use super::traits::Table;

enum Slot<T> {
    Empty,
    Tombstone,
    Occupied(T),
}

/// The observable state of a single slot.
///
/// `Tombstone` never turns back into `Empty`; only a later insert can reuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// The slot has never held a value.
    Empty,
    /// The slot holds a live value.
    Occupied,
    /// The slot held a value that has since been removed.
    Tombstone,
}

/// A fixed-capacity table resolving collisions by linear probing.
///
/// # Type Parameters
/// * `T` - The element type
/// * `N` - The number of slots, fixed for the lifetime of the table
/// * `S` - The hash builder type
pub struct OpenAddressingTable<T, const N: usize, S = DefaultHashBuilder> {
    slots: Box<[Slot<T>]>,
    len: usize,
    tombstones: usize,
    hash_builder: S,
}

impl<T, const N: usize> Default for OpenAddressingTable<T, N>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> OpenAddressingTable<T, N>
where
    T: Eq + Hash,
{
    /// Create an empty table using the default hash builder.
    ///
    /// # Panics
    /// Panics if `N` is zero
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<T, const N: usize, S> OpenAddressingTable<T, N, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Create an empty table hashing values with `hash_builder`.
    ///
    /// # Panics
    /// Panics if `N` is zero
    pub fn with_hasher(hash_builder: S) -> Self {
        assert!(N > 0, "capacity must be non-zero");
        debug!("creating open addressing table with {} slots", N);
        let mut slots = Vec::with_capacity(N);
        slots.resize_with(N, || Slot::Empty);
        Self {
            slots: slots.into_boxed_slice(),
            len: 0,
            tombstones: 0,
            hash_builder,
        }
    }

    #[inline]
    fn address(&self, value: &T) -> usize {
        (self.hash_builder.hash_one(value) % N as u64) as usize
    }

    /// Slot indices visited from `address`: `address, address + 1, ...`
    /// wrapping around, at most `N` of them.
    #[inline]
    fn probe(address: usize) -> impl Iterator<Item = usize> {
        (0..N).map(move |step| (address + step) % N)
    }

    /// Find the slot holding a value equal to `value`.
    ///
    /// The walk ends at the first empty slot: insertion always fills the first
    /// non-occupied slot on the way, so nothing equal can sit beyond one.
    fn find(&self, value: &T) -> Option<usize> {
        for idx in Self::probe(self.address(value)) {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied(stored) if stored == value => return Some(idx),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }

    /// Insert a value, reporting what happened.
    ///
    /// # Returns
    /// `Ok(true)` if the value was placed, `Ok(false)` if an equal value was
    /// already present, or `Err(InsertError::Full)` carrying the value back if
    /// every slot on its probe sequence is occupied
    pub fn try_insert(&mut self, value: T) -> Result<bool, InsertError<T>> {
        if self.find(&value).is_some() {
            return Ok(false);
        }

        let free = Self::probe(self.address(&value))
            .find(|&idx| !matches!(self.slots[idx], Slot::Occupied(_)));

        match free {
            Some(idx) => {
                if matches!(self.slots[idx], Slot::Tombstone) {
                    self.tombstones -= 1;
                }
                self.slots[idx] = Slot::Occupied(value);
                self.len += 1;
                trace!("placed value in slot {}", idx);
                Ok(true)
            }
            None => {
                debug!("all {} slots occupied, insert dropped", N);
                Err(InsertError::Full(value))
            }
        }
    }

    /// Get the index of the slot holding a value equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.find(value)
    }
}

impl<T, const N: usize, S> OpenAddressingTable<T, N, S> {
    /// Iterate over the stored values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Empty | Slot::Tombstone => None,
        })
    }

    /// Get the state of the slot at `index`.
    ///
    /// # Panics
    /// Panics if `index >= N`
    pub fn slot_state(&self, index: usize) -> SlotState {
        match &self.slots[index] {
            Slot::Empty => SlotState::Empty,
            Slot::Occupied(_) => SlotState::Occupied,
            Slot::Tombstone => SlotState::Tombstone,
        }
    }

    /// Get the number of slots currently marked as tombstones.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Drop every value. Occupied slots become tombstones; no slot that was
    /// ever used goes back to empty.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            if matches!(slot, Slot::Occupied(_)) {
                *slot = Slot::Tombstone;
            }
        }
        self.tombstones += self.len;
        self.len = 0;
    }
}

impl<T, const N: usize, S> Table<T> for OpenAddressingTable<T, N, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) {
        let _ = self.try_insert(value);
    }

    fn remove(&mut self, value: &T) {
        if let Some(idx) = self.find(value) {
            self.slots[idx] = Slot::Tombstone;
            self.len -= 1;
            self.tombstones += 1;
            trace!("slot {} marked as tombstone", idx);
        }
    }

    fn search(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize, S> Extend<T> for OpenAddressingTable<T, N, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.insert(value));
    }
}

impl<T: Debug, const N: usize, S> Debug for OpenAddressingTable<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
