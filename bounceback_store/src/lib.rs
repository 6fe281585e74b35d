// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounceback Store: persistence for a single "already visited" marker.
//!
//! Bounceback only ever remembers one thing per visitor: whether the bounce
//! prompt has been armed before. This crate reads and writes that marker using
//! the best mechanism the host offers.
//!
//! - A capability-complete key/value store ([`KeyValue`], e.g. `localStorage`) is
//!   used exclusively when present.
//! - Otherwise a single root-path cookie per key is written through a
//!   [`CookieJar`], expiring `cookie_life` days from the jar's current time.
//! - With neither, [`Storage::Unavailable`] reads as empty and ignores writes.
//!
//! The choice is made once, when the [`Storage`] value is built, instead of being
//! probed on every access.
//!
//! # Example
//!
//! ```rust
//! use bounceback_store::{MemoryCookieJar, MemoryStore, Storage, StorageKind, Store};
//!
//! // A host with `localStorage` never touches cookies.
//! let mut storage: Storage<MemoryStore, MemoryCookieJar> =
//!     Storage::select(Some(MemoryStore::new()), Some(MemoryCookieJar::new()));
//! assert_eq!(storage.kind(), StorageKind::Local);
//!
//! assert_eq!(storage.get("bounceback-visited"), "");
//! storage.set("bounceback-visited", "1", 365);
//! assert_eq!(storage.get("bounceback-visited"), "1");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backends;
pub mod http_date;
pub mod store;

pub use backends::NoBackend;
pub use backends::cookie::{CookieJar, CookieStore, MemoryCookieJar, find_cookie};
pub use backends::local::{KeyValue, LocalStore, MemoryStore};
pub use store::{Storage, StorageKind, Store};
