//! Keyed sequence collections.
//!
//! A [`KeyedCollection`] binds each sequence (the key) to exactly one name.
//! Insertion is total: re-inserting a known sequence never replaces the name
//! it is already bound to, and the caller learns what happened through the
//! returned [`InsertOutcome`].
//!
//! # Modules
//!
//! - [`error`] — Error types for lookups
//! - [`types`] — [`KeyedPair`] and [`InsertOutcome`]
//! - [`traits`] — The [`NameStore`] trait abstracting the backing map
//! - [`memory`] — `HashMap` and `BTreeMap` implementations of [`NameStore`]
//! - [`collection`] — [`KeyedCollection`] itself

pub mod collection;
pub mod error;
pub mod memory;
pub mod traits;
pub mod types;

pub use collection::KeyedCollection;
pub use error::{CollectionError, Result};
pub use traits::NameStore;
pub use types::{InsertOutcome, KeyedPair};
