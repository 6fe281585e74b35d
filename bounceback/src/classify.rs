// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment classifier: pick the strategy for a method and user agent.

use crate::types::{Method, Strategy};

/// Lower-case user-agent tokens that mark a mobile browser.
pub const MOBILE_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Whether `user_agent` contains any of [`MOBILE_TOKENS`], ignoring ASCII case.
pub fn is_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|token| ua.contains(token))
}

/// Resolve the effective strategy.
///
/// Explicit methods are honored as-is; [`Method::Auto`] uses history on mobile
/// and the mouse everywhere else.
pub fn resolve_strategy(method: Method, mobile: bool) -> Strategy {
    match method {
        Method::History => Strategy::History,
        Method::Mouse => Strategy::Mouse,
        Method::Auto if mobile => Strategy::History,
        Method::Auto => Strategy::Mouse,
    }
}
