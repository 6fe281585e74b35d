// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: host signals, listener sets, outcomes, and detection methods.
//!
//! ## Overview
//!
//! The host translates its own events into [`Signal`] values and feeds them to
//! [`Controller::handle`](crate::controller::Controller::handle). Each call
//! returns an [`Outcome`] describing what the controller did with the signal.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use kurbo::Point;

/// What the pointer moved onto when it left an element.
///
/// Only exits with no related target, or onto the root element, count as
/// leaving the viewport. Moving between child elements also produces leave
/// events in browsers and must be ignored.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RelatedTarget {
    /// No related target: the pointer left the document.
    #[default]
    None,
    /// The root (`<html>`) element.
    Root,
    /// Any other element.
    Element,
}

impl RelatedTarget {
    /// Whether this leave event represents a viewport exit.
    #[inline]
    pub fn is_viewport_exit(self) -> bool {
        matches!(self, Self::None | Self::Root)
    }
}

/// An input signal delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Signal {
    /// The pointer moved to a client-space position.
    PointerMove(Point),
    /// The pointer left an element at a client-space position.
    PointerLeave {
        /// Exit position in client coordinates (y grows downward).
        point: Point,
        /// What the pointer moved onto.
        related: RelatedTarget,
    },
    /// The page scrolled.
    Scroll,
    /// The history state changed (`popstate`).
    PopState,
    /// The URL fragment changed (`hashchange`).
    HashChange,
}

impl Signal {
    /// The listener slot this signal is delivered to.
    pub fn kind(&self) -> Signals {
        match self {
            Self::PointerMove(_) => Signals::POINTER_MOVE,
            Self::PointerLeave { .. } => Signals::POINTER_LEAVE,
            Self::Scroll => Signals::SCROLL,
            Self::PopState => Signals::POP_STATE,
            Self::HashChange => Signals::HASH_CHANGE,
        }
    }
}

bitflags::bitflags! {
    /// A set of signal listeners.
    ///
    /// Arming registers each listener at most once; signals whose slot is not
    /// registered are reported as [`Outcome::Unhandled`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Signals: u8 {
        /// [`Signal::PointerMove`].
        const POINTER_MOVE  = 0b0000_0001;
        /// [`Signal::PointerLeave`].
        const POINTER_LEAVE = 0b0000_0010;
        /// [`Signal::Scroll`].
        const SCROLL        = 0b0000_0100;
        /// [`Signal::PopState`].
        const POP_STATE     = 0b0000_1000;
        /// [`Signal::HashChange`].
        const HASH_CHANGE   = 0b0001_0000;
    }
}

/// What the bounce gate did with a qualifying bounce.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Delivery {
    /// The callback ran.
    Invoked,
    /// The display cap was already reached; the callback did not run.
    Capped,
}

/// Result of handling one [`Signal`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// No listener is registered for this signal.
    Unhandled,
    /// A listener ran but the signal did not qualify as a bounce.
    Handled,
    /// The signal qualified as a bounce and went through the gate.
    Bounce(Delivery),
}

/// Requested detection method.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// History on mobile user agents, mouse everywhere else.
    #[default]
    Auto,
    /// Always intercept back-navigation.
    History,
    /// Always watch for upward top-edge exits.
    Mouse,
}

impl Method {
    /// The option string for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::History => "history",
            Self::Mouse => "mouse",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Method`] string.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown detection method `{0}`, expected `auto`, `history` or `mouse`")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "history" => Ok(Self::History),
            "mouse" => Ok(Self::Mouse),
            other => Err(ParseMethodError(other.into())),
        }
    }
}

/// Detection strategy a [`Method`] resolves to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Pointer trajectory and top-edge exit.
    Mouse,
    /// Back-navigation onto a marked history entry.
    History,
}
