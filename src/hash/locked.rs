use spin::{Mutex, MutexGuard};

use super::traits::Table;

/// A table shared behind one spin-based lock.
///
/// The tables in this crate assume a single owner. `Locked` serializes access
/// so a table can be shared across threads: each operation takes the lock
/// once and holds it until it finishes.
pub struct Locked<H> {
    table: Mutex<H>,
}

impl<H: Default> Default for Locked<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H> Locked<H> {
    pub fn new(table: H) -> Self {
        Self {
            table: Mutex::new(table),
        }
    }

    /// Hold the lock across several operations.
    pub fn lock(&self) -> MutexGuard<'_, H> {
        self.table.lock()
    }

    pub fn into_inner(self) -> H {
        self.table.into_inner()
    }

    pub fn insert<T>(&self, value: T)
    where
        H: Table<T>,
    {
        self.table.lock().insert(value)
    }

    pub fn remove<T>(&self, value: &T)
    where
        H: Table<T>,
    {
        self.table.lock().remove(value)
    }

    pub fn search<T>(&self, value: &T) -> bool
    where
        H: Table<T>,
    {
        self.table.lock().search(value)
    }

    /// Replace `old` with `new` under a single lock acquisition.
    pub fn change<T>(&self, old: &T, new: T)
    where
        H: Table<T>,
    {
        self.table.lock().change(old, new)
    }
}
