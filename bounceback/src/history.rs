// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! History strategy: treat back-navigation onto a synthetic entry as a bounce.
//!
//! ## Variants
//!
//! - State-based: the current entry's state is replaced with a
//!   [`EntryState::BOUNCING`] marker and a fresh, unmarked entry is pushed on
//!   top. A `popstate` that lands on a marked entry is a bounce.
//! - Fragment-based, for engines without history state: the current fragment
//!   is replaced with [`SENTINEL`] and then cleared, leaving two entries that
//!   differ only by fragment. A `hashchange` onto a fragment ending in the
//!   sentinel is a bounce.
//!
//! The variant is fixed when the [`Navigator`] is built; a host with neither
//! capability gets [`Navigator::Unsupported`] and the strategy stays inert.
//!
//! ```
//! use bounceback::history::{EntryState, MemoryHistory, Navigator, NoHistory};
//! use bounceback::types::{Signal, Signals};
//!
//! let mut nav: Navigator<MemoryHistory, NoHistory> =
//!     Navigator::select(Some(MemoryHistory::new()), None);
//! assert_eq!(nav.activate(), Signals::POP_STATE);
//!
//! let Navigator::State(history) = &mut nav else { unreachable!() };
//! assert_eq!(history.entries(), &[Some(EntryState::BOUNCING), None]);
//! assert!(history.back());
//! assert!(nav.is_bounce(&Signal::PopState));
//! ```

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::types::{Signal, Signals};

/// Fragment token marking the synthetic entry of the fragment-based variant.
pub const SENTINEL: &str = "bht";

/// State attached to a history entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EntryState {
    /// Whether navigating onto this entry counts as a bounce.
    pub is_bouncing: bool,
}

impl EntryState {
    /// The marker written by the state-based variant.
    pub const BOUNCING: Self = Self { is_bouncing: true };
}

/// Session history with per-entry state, shaped like `window.history`.
pub trait StateHistory {
    /// State of the current entry.
    fn state(&self) -> Option<EntryState>;
    /// Replace the current entry's state.
    fn replace_state(&mut self, state: Option<EntryState>);
    /// Push a new entry with `state` and make it current.
    fn push_state(&mut self, state: Option<EntryState>);
}

/// URL-fragment navigation, shaped like `window.location.hash`.
///
/// Fragments are passed and returned without the leading `#`.
pub trait FragmentHistory {
    /// Current fragment.
    fn fragment(&self) -> String;
    /// Replace the current entry's fragment without adding an entry.
    fn replace_fragment(&mut self, fragment: &str);
    /// Navigate to `fragment`, adding an entry when it differs from the current one.
    fn set_fragment(&mut self, fragment: &str);
}

/// Placeholder for a navigation capability the host does not have.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHistory;

impl StateHistory for NoHistory {
    #[inline]
    fn state(&self) -> Option<EntryState> {
        None
    }

    #[inline]
    fn replace_state(&mut self, _state: Option<EntryState>) {}

    #[inline]
    fn push_state(&mut self, _state: Option<EntryState>) {}
}

impl FragmentHistory for NoHistory {
    #[inline]
    fn fragment(&self) -> String {
        String::new()
    }

    #[inline]
    fn replace_fragment(&mut self, _fragment: &str) {}

    #[inline]
    fn set_fragment(&mut self, _fragment: &str) {}
}

/// Which history variant a [`Navigator`] uses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HistoryVariant {
    /// State-based.
    State,
    /// Fragment-based.
    Fragment,
    /// Inert.
    Unsupported,
}

/// Navigation capability chosen once from what the host provides.
#[derive(Clone, Debug)]
pub enum Navigator<S = NoHistory, F = NoHistory> {
    /// History state is available.
    State(S),
    /// Only fragment changes are observable.
    Fragment(F),
    /// Neither; the history strategy does nothing.
    Unsupported,
}

impl<S: StateHistory, F: FragmentHistory> Navigator<S, F> {
    /// Prefer history state, then fragments.
    pub fn select(state: Option<S>, fragment: Option<F>) -> Self {
        match (state, fragment) {
            (Some(s), _) => Self::State(s),
            (None, Some(f)) => Self::Fragment(f),
            (None, None) => Self::Unsupported,
        }
    }

    /// The variant in use.
    pub fn variant(&self) -> HistoryVariant {
        match self {
            Self::State(_) => HistoryVariant::State,
            Self::Fragment(_) => HistoryVariant::Fragment,
            Self::Unsupported => HistoryVariant::Unsupported,
        }
    }

    /// Install the synthetic history entry and return the listeners to register.
    pub fn activate(&mut self) -> Signals {
        match self {
            Self::State(h) => {
                h.replace_state(Some(EntryState::BOUNCING));
                h.push_state(None);
                log::debug!("history strategy armed with state markers");
                Signals::POP_STATE
            }
            Self::Fragment(h) => {
                h.replace_fragment(SENTINEL);
                h.set_fragment("");
                log::debug!("history strategy armed with fragment sentinel");
                Signals::HASH_CHANGE
            }
            Self::Unsupported => {
                log::debug!("history strategy inert: no navigation capability");
                Signals::empty()
            }
        }
    }

    /// Whether `signal` shows navigation back onto the synthetic entry.
    pub fn is_bounce(&self, signal: &Signal) -> bool {
        match (self, signal) {
            (Self::State(h), Signal::PopState) => h.state().is_some_and(|s| s.is_bouncing),
            (Self::Fragment(h), Signal::HashChange) => h.fragment().ends_with(SENTINEL),
            _ => false,
        }
    }
}

/// In-memory [`StateHistory`]: an entry stack with a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<Option<EntryState>>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    /// A history holding only the current page, without state.
    pub fn new() -> Self {
        Self {
            entries: vec![None],
            cursor: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Option<EntryState>] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Go back one entry. Returns `false` at the oldest entry.
    ///
    /// The caller delivers [`Signal::PopState`] when this returns `true`.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Go forward one entry. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl StateHistory for MemoryHistory {
    fn state(&self) -> Option<EntryState> {
        self.entries[self.cursor]
    }

    fn replace_state(&mut self, state: Option<EntryState>) {
        self.entries[self.cursor] = state;
    }

    fn push_state(&mut self, state: Option<EntryState>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor += 1;
    }
}

/// In-memory [`FragmentHistory`]: a stack of fragments with a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryFragments {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryFragments {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryFragments {
    /// A history holding only the current page, at `fragment`.
    pub fn new(fragment: &str) -> Self {
        Self {
            entries: vec![fragment.to_string()],
            cursor: 0,
        }
    }

    /// All fragments, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Go back one entry. Returns whether the fragment changed.
    ///
    /// The caller delivers [`Signal::HashChange`] when this returns `true`.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let before = self.cursor;
        self.cursor -= 1;
        self.entries[before] != self.entries[self.cursor]
    }
}

impl FragmentHistory for MemoryFragments {
    fn fragment(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace_fragment(&mut self, fragment: &str) {
        self.entries[self.cursor] = fragment.to_string();
    }

    fn set_fragment(&mut self, fragment: &str) {
        if self.entries[self.cursor] == fragment {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor += 1;
    }
}
