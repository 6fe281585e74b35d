// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Facts about the current document: user agent, referrer, host, and the
//! global binding slot restored by `no_conflict`.

use alloc::string::String;

use crate::classify;

/// Name under which the controller installs itself in the global binding slot.
pub const GLOBAL_NAME: &str = "Bounceback";

/// The current document as seen by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    /// Browser user-agent string.
    pub user_agent: String,
    /// Referring URL, if the browser reported one.
    pub referrer: Option<String>,
    /// Host of the current location (`hostname[:port]`).
    pub host: String,
    /// Current occupant of the host's global binding slot.
    pub global_binding: Option<String>,
}

impl Page {
    /// A page on `host` viewed with `user_agent`, without a referrer.
    pub fn new(user_agent: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            host: host.into(),
            ..Self::default()
        }
    }

    /// Set the referrer.
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// Set the value already occupying the global binding slot.
    pub fn with_global_binding(mut self, binding: impl Into<String>) -> Self {
        self.global_binding = Some(binding.into());
        self
    }

    /// Whether the user agent looks like a mobile browser.
    pub fn is_mobile(&self) -> bool {
        classify::is_mobile(&self.user_agent)
    }

    /// Whether the referrer is on this page's host.
    ///
    /// An absent or empty referrer, or one without a host, never matches.
    pub fn referrer_is_same_host(&self) -> bool {
        self.referrer
            .as_deref()
            .and_then(url_host)
            .is_some_and(|host| host.eq_ignore_ascii_case(&self.host))
    }
}

/// Extract `host[:port]` from an absolute URL.
///
/// Userinfo is dropped, as is the port when it is the default for `http` or
/// `https`. Returns `None` for relative URLs and empty authorities.
pub fn url_host(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    if host.is_empty() {
        return None;
    }
    let default_port = if scheme.eq_ignore_ascii_case("http") {
        ":80"
    } else if scheme.eq_ignore_ascii_case("https") {
        ":443"
    } else {
        return Some(host);
    };
    Some(host.strip_suffix(default_port).unwrap_or(host))
}
