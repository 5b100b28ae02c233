//! Fixed-capacity hash tables.
//!
//! Three tables implement the same [`Table`](prelude::Table) contract and can
//! be swapped for one another:
//!
//! - [`OpenAddressingTable`]: one flat array of slots, linear probing and
//!   tombstone deletion. Holds at most `N` values.
//! - [`OrderedChainTable`]: `N` buckets of ordered sets.
//! - [`HashedChainTable`]: `N` buckets of hashed sets.
//!
//! None of them ever grows: `N` is fixed when the type is named.
//!
//! # Examples
//!
//! ```
//! use fixed_tables::hash::{prelude::*, HashedChainTable, OpenAddressingTable};
//!
//! fn exercise<H: Table<u32>>(table: &mut H) {
//!     table.insert(7);
//!     table.insert(7);
//!     assert_eq!(table.len(), 1);
//!
//!     table.change(&7, 9);
//!     assert!(!table.search(&7));
//!     assert!(table.search(&9));
//!
//!     // `new` is never inserted when `old` is missing.
//!     table.change(&7, 11);
//!     assert!(!table.search(&11));
//! }
//!
//! exercise(&mut OpenAddressingTable::<u32, 8>::new());
//! exercise(&mut HashedChainTable::<u32, 8>::new());
//! ```

mod chaining;
mod error;
mod locked;
mod probing;
mod traits;

#[cfg(test)]
mod tests;

pub use chaining::{BucketSetTable, HashedChainTable, OrderedChainTable};
pub use locked::Locked;
pub use probing::{OpenAddressingTable, SlotState};

pub mod prelude {
    pub use super::error::InsertError;
    pub use super::traits::*;
}
