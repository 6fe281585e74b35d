// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backends the [`Storage`](crate::Storage) selector chooses between.
//!
//! - `local`: persistent key/value stores (`localStorage` and friends).
//! - `cookie`: a root-path cookie per key, used when no key/value store exists.
//!
//! Both come with an in-memory implementation for hosts without a browser and
//! for tests.

use alloc::string::String;

pub mod cookie;
pub mod local;

/// Placeholder for a capability the host does not have.
///
/// Fill the unused type parameter of [`Storage`](crate::Storage) with this.
/// As a key/value store it holds nothing; as a cookie jar it is empty, drops
/// writes and reports the epoch.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoBackend;

impl local::KeyValue for NoBackend {
    #[inline]
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    #[inline]
    fn set_item(&mut self, _key: &str, _value: &str) {}
}

impl cookie::CookieJar for NoBackend {
    #[inline]
    fn cookie(&self) -> String {
        String::new()
    }

    #[inline]
    fn set_cookie(&mut self, _line: &str) {}

    #[inline]
    fn unix_time(&self) -> u64 {
        0
    }
}
