// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller: configuration, arming, and signal dispatch.
//!
//! ## Lifecycle
//!
//! One controller per page. [`Controller::init`] merges options, runs the
//! referrer check, and arms detection at most once. After arming, the host
//! forwards its events through [`Controller::handle`]; the controller answers
//! [`Outcome::Unhandled`] for any signal it never registered a listener for.
//!
//! ## Time
//!
//! The host drives the clock with [`Controller::set_now`] or
//! [`Controller::advance`]. Scroll suppression is measured against it.

use alloc::string::String;
use core::fmt;
use core::time::Duration;

use bounceback_store::Store;

use crate::classify::resolve_strategy;
use crate::config::{Config, Options};
use crate::gate::BounceGate;
use crate::history::{FragmentHistory, Navigator, NoHistory, StateHistory};
use crate::mouse::MouseStrategy;
use crate::page::{GLOBAL_NAME, Page};
use crate::types::{Delivery, Outcome, Signal, Signals, Strategy};

/// Value written to the visited marker.
pub const VISITED: &str = "1";

/// Bounce detection for one page.
///
/// ## Usage
///
/// - Build with [`Controller::new`] from the [`Page`], a [`Store`] for the
///   visited marker, and a [`Navigator`] for the history strategy.
/// - Call [`Controller::init`] (any number of times).
/// - Feed host events to [`Controller::handle`].
///
/// ```
/// use bounceback::config::Options;
/// use bounceback::controller::Controller;
/// use bounceback::history::{MemoryHistory, Navigator, NoHistory};
/// use bounceback::page::Page;
/// use bounceback::types::{Delivery, Outcome, Signal, Strategy};
/// use bounceback_store::{LocalStore, MemoryStore};
///
/// let page = Page::new("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", "shop.example");
/// let store = LocalStore::new(MemoryStore::new());
/// let nav: Navigator<MemoryHistory, NoHistory> = Navigator::select(Some(MemoryHistory::new()), None);
///
/// let mut ctl = Controller::new(page, store, nav);
/// ctl.init(Options::new());
/// assert_eq!(ctl.strategy(), Some(Strategy::History));
///
/// if let Navigator::State(history) = ctl.navigator_mut() {
///     history.back();
/// }
/// assert_eq!(ctl.handle(Signal::PopState), Outcome::Bounce(Delivery::Invoked));
/// ```
pub struct Controller<St, S = NoHistory, F = NoHistory> {
    config: Config,
    store: St,
    navigator: Navigator<S, F>,
    page: Page,
    previous_binding: Option<String>,
    gate: BounceGate,
    mouse: Option<MouseStrategy>,
    strategy: Option<Strategy>,
    listeners: Signals,
    armed: bool,
    disabled: bool,
    now: Duration,
}

impl<St, S, F> fmt::Debug for Controller<St, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field("strategy", &self.strategy)
            .field("listeners", &self.listeners)
            .field("armed", &self.armed)
            .field("disabled", &self.disabled)
            .field("shown", &self.gate.shown())
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

impl<St: Store, S: StateHistory, F: FragmentHistory> Controller<St, S, F> {
    /// Create an unarmed controller with default configuration.
    ///
    /// The controller takes the page's global binding slot; the previous
    /// occupant is kept for [`Controller::no_conflict`].
    pub fn new(mut page: Page, store: St, navigator: Navigator<S, F>) -> Self {
        let previous_binding = page.global_binding.replace(String::from(GLOBAL_NAME));
        Self {
            config: Config::default(),
            store,
            navigator,
            page,
            previous_binding,
            gate: BounceGate::new(),
            mouse: None,
            strategy: None,
            listeners: Signals::empty(),
            armed: false,
            disabled: false,
            now: Duration::ZERO,
        }
    }

    /// Merge `options`, check the referrer, and arm detection if appropriate.
    ///
    /// - Before arming, absent options are filled from the active configuration
    ///   and the result becomes the new active configuration. Once armed, the
    ///   configuration is frozen and `options` are dropped.
    /// - When the referrer is on the same host (and the check is enabled), the
    ///   visited marker is written even if detection never arms.
    /// - Detection arms once: when `aggressive` is set or no visited marker is
    ///   stored. Arming activates the resolved strategy and writes the marker.
    pub fn init(&mut self, options: Options) -> &mut Self {
        if self.armed {
            log::debug!("already armed, ignoring new options: {options:?}");
        } else {
            let base = core::mem::take(&mut self.config);
            self.config = options.resolve(base);
        }

        if self.config.check_referrer && self.page.referrer_is_same_host() {
            log::debug!("same-host referrer, marking visitor as seen");
            self.mark_visited();
        }

        if !self.armed
            && (self.config.aggressive || self.store.get(&self.config.store_name).is_empty())
        {
            self.arm();
        }
        self
    }

    fn arm(&mut self) {
        self.armed = true;
        let strategy = resolve_strategy(self.config.method, self.page.is_mobile());
        log::debug!("arming {strategy:?} strategy (method {})", self.config.method);
        self.strategy = Some(strategy);
        self.listeners = match strategy {
            Strategy::Mouse => {
                self.mouse = Some(MouseStrategy::new());
                let mut listeners = Signals::POINTER_MOVE | Signals::POINTER_LEAVE;
                if !self.config.scroll_delay.is_zero() {
                    listeners |= Signals::SCROLL;
                }
                listeners
            }
            Strategy::History => self.navigator.activate(),
        };
        self.mark_visited();
    }

    fn mark_visited(&mut self) {
        self.store
            .set(&self.config.store_name, VISITED, self.config.cookie_life);
    }

    /// Deliver one host signal.
    pub fn handle(&mut self, signal: Signal) -> Outcome {
        if !self.listeners.contains(signal.kind()) {
            return Outcome::Unhandled;
        }
        let bounced = match signal {
            Signal::PointerMove(pt) => {
                if let Some(mouse) = &mut self.mouse {
                    mouse.on_pointer_move(pt);
                }
                false
            }
            Signal::PointerLeave { point, related } => {
                !self.disabled
                    && self
                        .mouse
                        .as_ref()
                        .is_some_and(|m| m.qualifies(point, related, self.now, &self.config))
            }
            Signal::Scroll => {
                if let Some(mouse) = &mut self.mouse {
                    mouse.on_scroll(self.now, self.config.scroll_delay);
                }
                false
            }
            Signal::PopState | Signal::HashChange => self.navigator.is_bounce(&signal),
        };
        if bounced {
            log::trace!("{signal:?} qualified as a bounce");
            Outcome::Bounce(self.on_bounce())
        } else {
            Outcome::Handled
        }
    }

    /// Report a bounce through the gate, as the strategies do.
    pub fn on_bounce(&mut self) -> Delivery {
        self.gate
            .signal(self.config.max_display, &mut *self.config.on_bounce)
    }

    /// Pause detection. Listeners stay registered.
    ///
    /// Only the mouse strategy consults this flag; back-navigation bounces are
    /// still reported while disabled.
    pub fn disable(&mut self) -> &mut Self {
        self.disabled = true;
        self
    }

    /// Resume detection.
    pub fn enable(&mut self) -> &mut Self {
        self.disabled = false;
        self
    }

    /// Give the global binding slot back to its previous occupant.
    pub fn no_conflict(&mut self) -> &mut Self {
        self.page.global_binding = self.previous_binding.clone();
        self
    }

    /// Set the host clock.
    pub fn set_now(&mut self, now: Duration) {
        self.now = now;
    }

    /// Advance the host clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Current host clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether detection has been armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether detection is paused.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether scroll suppression is active right now.
    pub fn is_suppressed(&self) -> bool {
        self.mouse.as_ref().is_some_and(|m| m.is_suppressed(self.now))
    }

    /// Strategy chosen at arming time.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Registered listeners.
    pub fn listeners(&self) -> Signals {
        self.listeners
    }

    /// Bounces reported so far, including capped ones.
    pub fn shown(&self) -> u32 {
        self.gate.shown()
    }

    /// Mouse trajectory tracker, once the mouse strategy is armed.
    pub fn mouse(&self) -> Option<&MouseStrategy> {
        self.mouse.as_ref()
    }

    /// Marker storage.
    pub fn store(&self) -> &St {
        &self.store
    }

    /// Marker storage, mutably (for hosts that reset or seed the visited marker).
    pub fn store_mut(&mut self) -> &mut St {
        &mut self.store
    }

    /// Navigation capability.
    pub fn navigator(&self) -> &Navigator<S, F> {
        &self.navigator
    }

    /// Navigation capability, mutably (for hosts that simulate navigation).
    pub fn navigator_mut(&mut self) -> &mut Navigator<S, F> {
        &mut self.navigator
    }

    /// The page.
    pub fn page(&self) -> &Page {
        &self.page
    }
}
