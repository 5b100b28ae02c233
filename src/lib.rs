//! Fixed-capacity hash tables with interchangeable collision resolution.
//!
//! See [`hash`] for the table contract and its three implementations.
#![no_std]

extern crate alloc;

pub mod hash;
