// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The storage contract and the one-time backend selection.

use alloc::string::String;

use crate::backends::NoBackend;
use crate::backends::cookie::{CookieJar, CookieStore};
use crate::backends::local::{KeyValue, LocalStore};

/// Reads and writes string markers by key.
///
/// Absent keys read as the empty string. Writes never fail; a backend that
/// cannot persist simply drops the value.
pub trait Store {
    /// Returns the value stored under `key`, or `""` if there is none.
    fn get(&self, key: &str) -> String;

    /// Stores `value` under `key`.
    ///
    /// `cookie_life` is the lifetime in days for backends that expire entries
    /// (cookies); persistent key/value backends ignore it.
    fn set(&mut self, key: &str, value: &str, cookie_life: u32);
}

/// Which mechanism a [`Storage`] settled on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StorageKind {
    /// Persistent key/value store.
    Local,
    /// Same-site cookie fallback.
    Cookie,
    /// Nothing available.
    Unavailable,
}

/// Storage chosen once from the capabilities a host provides.
///
/// Use [`Storage::select`] to build one. The key/value backend wins whenever it
/// is present; the cookie jar is only used as a fallback.
#[derive(Clone, Debug)]
pub enum Storage<K = NoBackend, J = NoBackend> {
    /// Key/value store (e.g. `localStorage`).
    Local(LocalStore<K>),
    /// Cookie fallback.
    Cookie(CookieStore<J>),
    /// Neither mechanism exists: reads are empty and writes are dropped, so the
    /// visitor always looks unvisited.
    Unavailable,
}

impl<K: KeyValue, J: CookieJar> Storage<K, J> {
    /// Pick the best available backend.
    pub fn select(local: Option<K>, cookies: Option<J>) -> Self {
        match (local, cookies) {
            (Some(kv), _) => Self::Local(LocalStore::new(kv)),
            (None, Some(jar)) => {
                log::debug!("no key/value storage, falling back to cookies");
                Self::Cookie(CookieStore::new(jar))
            }
            (None, None) => {
                log::debug!("no persistent storage available");
                Self::Unavailable
            }
        }
    }

    /// The mechanism in use.
    pub fn kind(&self) -> StorageKind {
        match self {
            Self::Local(_) => StorageKind::Local,
            Self::Cookie(_) => StorageKind::Cookie,
            Self::Unavailable => StorageKind::Unavailable,
        }
    }
}

impl<K: KeyValue, J: CookieJar> Store for Storage<K, J> {
    fn get(&self, key: &str) -> String {
        match self {
            Self::Local(s) => s.get(key),
            Self::Cookie(s) => s.get(key),
            Self::Unavailable => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str, cookie_life: u32) {
        match self {
            Self::Local(s) => s.set(key, value, cookie_life),
            Self::Cookie(s) => s.set(key, value, cookie_life),
            Self::Unavailable => {}
        }
    }
}
