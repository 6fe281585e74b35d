// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cookie fallback backend.
//!
//! Values are written as `key=value; expires=<HTTP-date>;path=/;` and read back
//! by scanning the jar's `name=value; name=value` string.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::http_date::format_http_date;
use crate::store::Store;

const SECONDS_PER_DAY: u64 = 86_400;

/// Access to a document's cookies, shaped like `document.cookie`.
pub trait CookieJar {
    /// All visible cookies as `name=value` pairs joined by `;`.
    fn cookie(&self) -> String;
    /// Write one cookie line (`name=value; attr; attr`).
    fn set_cookie(&mut self, line: &str);
    /// Current time in seconds since the Unix epoch, used to compute expiry.
    fn unix_time(&self) -> u64;
}

/// Find the value of cookie `key` in a `name=value; name=value` string.
///
/// Whitespace before a name is ignored. Everything after the first `=` is the
/// value, so values may themselves contain `=`. A pair without `=` matches with
/// an empty value.
pub fn find_cookie<'a>(cookies: &'a str, key: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let pair = pair.trim_start();
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        (name == key).then_some(value)
    })
}

/// [`Store`] over a [`CookieJar`].
#[derive(Clone, Debug, Default)]
pub struct CookieStore<J> {
    jar: J,
}

impl<J: CookieJar> CookieStore<J> {
    /// Wrap a cookie jar.
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// The wrapped jar.
    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// The wrapped jar, mutably.
    pub fn jar_mut(&mut self) -> &mut J {
        &mut self.jar
    }
}

impl<J: CookieJar> Store for CookieStore<J> {
    fn get(&self, key: &str) -> String {
        let cookies = self.jar.cookie();
        find_cookie(&cookies, key).unwrap_or_default().to_string()
    }

    fn set(&mut self, key: &str, value: &str, cookie_life: u32) {
        let expires = self
            .jar
            .unix_time()
            .saturating_add(u64::from(cookie_life) * SECONDS_PER_DAY);
        let line = format!("{key}={value}; expires={};path=/;", format_http_date(expires));
        self.jar.set_cookie(&line);
    }
}

/// In-memory [`CookieJar`].
///
/// Keeps one value per cookie name (later writes replace earlier ones) and the
/// raw lines written, in order. Attributes such as `expires` are recorded but
/// not enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryCookieJar {
    cookies: Vec<(String, String)>,
    written: Vec<String>,
    now: u64,
}

impl MemoryCookieJar {
    /// Create an empty jar whose clock reads the epoch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty jar whose clock reads `now` (seconds since the epoch).
    pub fn at(now: u64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Move the jar's clock.
    pub fn set_unix_time(&mut self, now: u64) {
        self.now = now;
    }

    /// Raw cookie lines passed to [`CookieJar::set_cookie`], oldest first.
    pub fn written(&self) -> &[String] {
        &self.written
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookie(&self) -> String {
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        pairs.join("; ")
    }

    fn set_cookie(&mut self, line: &str) {
        self.written.push(line.to_string());
        let first = line.split(';').next().unwrap_or_default().trim();
        let (name, value) = first.split_once('=').unwrap_or((first, ""));
        match self.cookies.iter_mut().find(|(n, _)| n.as_str() == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.cookies.push((name.to_string(), value.to_string())),
        }
    }

    fn unix_time(&self) -> u64 {
        self.now
    }
}
