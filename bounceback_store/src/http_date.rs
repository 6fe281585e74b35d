// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! IMF-fixdate formatting for cookie `expires` attributes.

use alloc::string::{String, ToString};

use chrono::{DateTime, Utc};

/// Format seconds since the Unix epoch as `Thu, 01 Jan 1970 00:00:00 GMT`.
///
/// Instants past the last representable date clamp to it.
pub fn format_http_date(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
