#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        macro_rules! table_log {
            ($($arg:tt)*) => { log::debug!($($arg)*) };
        }
    } else {
        macro_rules! table_log {
            ($($arg:tt)*) => {};
        }
    }
}

/// Configuration of tables before construction.
pub mod builder;

/// The error taxonomy shared by both containers.
pub mod error;

/// A key-to-value map over the open-addressing `HashTable`.
///
/// This module provides a `HashMap` that wraps the `HashTable` with a
/// caller-supplied hash function and strict and permissive operations.
pub mod hash_map;

/// A set of elements over the open-addressing `HashTable`.
///
/// This module provides a `HashSet` that wraps the `HashTable` with a
/// caller-supplied hash function and strict and permissive operations.
pub mod hash_set;

/// The slot array and probing algorithm shared by `HashMap` and `HashSet`.
pub mod hash_table;

/// Hash function capability.
pub mod hasher;

mod slot;

pub use builder::Builder;
pub use error::Error;
pub use error::Result;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
#[cfg(feature = "stats")]
pub use hash_table::TableStats;
pub use hasher::KeyHasher;
