// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration: resolved [`Config`] values and caller-supplied [`Options`].
//!
//! ## Merging
//!
//! [`Options`] carries only what a caller wants to change. Resolving it against
//! a base [`Config`] fills every absent field from that base, so repeated
//! initialization only fills the gaps left by the newest options:
//!
//! ```
//! use bounceback::config::{Config, Options};
//! use bounceback::types::Method;
//!
//! let first = Options::new().max_display(3).resolve(Config::default());
//! let second = Options::new().method(Method::Mouse).resolve(first);
//! assert_eq!(second.max_display, 3);
//! assert_eq!(second.method, Method::Mouse);
//! assert_eq!(second.distance, 100.0);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::time::Duration;

use crate::types::Method;

/// Callback invoked when a bounce passes the gate.
pub type BounceHandler = Box<dyn FnMut()>;

/// Default maximum exit height in pixels.
pub const DEFAULT_DISTANCE: f64 = 100.0;
/// Default display cap.
pub const DEFAULT_MAX_DISPLAY: u32 = 1;
/// Default minimum net upward travel across the sample window, in pixels.
pub const DEFAULT_SENSITIVITY: f64 = 10.0;
/// Default cookie lifetime in days.
pub const DEFAULT_COOKIE_LIFE: u32 = 365;
/// Default post-scroll suppression.
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(500);
/// Default storage key for the visited marker.
pub const DEFAULT_STORE_NAME: &str = "bounceback-visited";

/// Resolved configuration.
pub struct Config {
    /// Exits at or below this many pixels from the top qualify.
    pub distance: f64,
    /// Maximum callback invocations per page lifetime; `0` means unlimited.
    pub max_display: u32,
    /// Detection method.
    pub method: Method,
    /// Minimum net upward travel across the sample window, in pixels.
    pub sensitivity: f64,
    /// Cookie lifetime in days (cookie fallback only).
    pub cookie_life: u32,
    /// How long detection stays suppressed after the last scroll; zero disables
    /// suppression.
    pub scroll_delay: Duration,
    /// Arm even when the visited marker is present.
    pub aggressive: bool,
    /// Mark the visitor as seen when the referrer is on the same host.
    pub check_referrer: bool,
    /// Storage key for the visited marker.
    pub store_name: String,
    /// Bounce callback.
    pub on_bounce: BounceHandler,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            max_display: DEFAULT_MAX_DISPLAY,
            method: Method::Auto,
            sensitivity: DEFAULT_SENSITIVITY,
            cookie_life: DEFAULT_COOKIE_LIFE,
            scroll_delay: DEFAULT_SCROLL_DELAY,
            aggressive: false,
            check_referrer: true,
            store_name: String::from(DEFAULT_STORE_NAME),
            on_bounce: Box::new(|| {}),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("distance", &self.distance)
            .field("max_display", &self.max_display)
            .field("method", &self.method)
            .field("sensitivity", &self.sensitivity)
            .field("cookie_life", &self.cookie_life)
            .field("scroll_delay", &self.scroll_delay)
            .field("aggressive", &self.aggressive)
            .field("check_referrer", &self.check_referrer)
            .field("store_name", &self.store_name)
            .finish_non_exhaustive()
    }
}

/// Caller overrides; absent fields are filled during [`Options::resolve`].
///
/// With the `serde` feature this deserializes from the camel-case option names
/// (`maxDisplay`, `scrollDelay` in milliseconds, `storeName`, ...). The callback
/// cannot be deserialized and must be set with [`Options::on_bounce`].
#[derive(Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Options {
    /// See [`Config::distance`].
    pub distance: Option<f64>,
    /// See [`Config::max_display`].
    pub max_display: Option<u32>,
    /// See [`Config::method`].
    pub method: Option<Method>,
    /// See [`Config::sensitivity`].
    pub sensitivity: Option<f64>,
    /// See [`Config::cookie_life`].
    pub cookie_life: Option<u32>,
    /// See [`Config::scroll_delay`]; deserialized from milliseconds.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "millis::deserialize"))]
    pub scroll_delay: Option<Duration>,
    /// See [`Config::aggressive`].
    pub aggressive: Option<bool>,
    /// See [`Config::check_referrer`].
    pub check_referrer: Option<bool>,
    /// See [`Config::store_name`].
    pub store_name: Option<String>,
    /// See [`Config::on_bounce`].
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_bounce: Option<BounceHandler>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("distance", &self.distance)
            .field("max_display", &self.max_display)
            .field("method", &self.method)
            .field("sensitivity", &self.sensitivity)
            .field("cookie_life", &self.cookie_life)
            .field("scroll_delay", &self.scroll_delay)
            .field("aggressive", &self.aggressive)
            .field("check_referrer", &self.check_referrer)
            .field("store_name", &self.store_name)
            .field("on_bounce", &self.on_bounce.as_ref().map(|_| "FnMut()"))
            .finish()
    }
}

impl Options {
    /// Options that override nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum exit height in pixels.
    pub fn distance(mut self, px: f64) -> Self {
        self.distance = Some(px);
        self
    }

    /// Set the display cap; `0` means unlimited.
    pub fn max_display(mut self, n: u32) -> Self {
        self.max_display = Some(n);
        self
    }

    /// Set the detection method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the minimum net upward travel in pixels.
    pub fn sensitivity(mut self, px: f64) -> Self {
        self.sensitivity = Some(px);
        self
    }

    /// Set the cookie lifetime in days.
    pub fn cookie_life(mut self, days: u32) -> Self {
        self.cookie_life = Some(days);
        self
    }

    /// Set the post-scroll suppression delay.
    pub fn scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = Some(delay);
        self
    }

    /// Ignore the visited marker when arming.
    pub fn aggressive(mut self, aggressive: bool) -> Self {
        self.aggressive = Some(aggressive);
        self
    }

    /// Toggle the same-host referrer check.
    pub fn check_referrer(mut self, check: bool) -> Self {
        self.check_referrer = Some(check);
        self
    }

    /// Set the storage key.
    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    /// Set the bounce callback.
    pub fn on_bounce(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_bounce = Some(Box::new(f));
        self
    }

    /// Fill every absent field from `base`.
    pub fn resolve(self, base: Config) -> Config {
        Config {
            distance: self.distance.unwrap_or(base.distance),
            max_display: self.max_display.unwrap_or(base.max_display),
            method: self.method.unwrap_or(base.method),
            sensitivity: self.sensitivity.unwrap_or(base.sensitivity),
            cookie_life: self.cookie_life.unwrap_or(base.cookie_life),
            scroll_delay: self.scroll_delay.unwrap_or(base.scroll_delay),
            aggressive: self.aggressive.unwrap_or(base.aggressive),
            check_referrer: self.check_referrer.unwrap_or(base.check_referrer),
            store_name: self.store_name.unwrap_or(base.store_name),
            on_bounce: self.on_bounce.unwrap_or(base.on_bounce),
        }
    }
}

#[cfg(feature = "serde")]
mod millis {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
