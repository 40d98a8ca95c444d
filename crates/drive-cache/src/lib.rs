//! Typed local persistence for DriveDesk.
//!
//! The storefront keeps a handful of small JSON records between steps of
//! the booking flow: the signed-in user, auth tokens and the checkout
//! context written after a booking is created. This crate hides where those
//! records live behind the [`LocalStore`] trait so flows can be driven with
//! an in-memory store in tests and a directory of JSON files in production.
//!
//! # Example
//!
//! ```rust
//! use drive_cache::{Cache, TypedKey};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Greeting {
//!     text: String,
//! }
//!
//! const GREETING: TypedKey<Greeting> = TypedKey::new("greeting");
//!
//! let cache = Cache::in_memory();
//! cache.store(&GREETING, &Greeting { text: "hello".into() }).unwrap();
//! assert_eq!(cache.load(&GREETING).unwrap().unwrap().text, "hello");
//!
//! cache.clear(&GREETING).unwrap();
//! assert!(cache.load(&GREETING).unwrap().is_none());
//! ```

mod error;
mod file;
mod kv;
mod memory;
mod store;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, TypedKey};
pub use memory::MemoryStore;
pub use store::LocalStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, LocalStore, MemoryStore, TypedKey};
}
