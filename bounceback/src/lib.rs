// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounceback: a deterministic, `no_std` exit-intent detector.
//!
//! ## Overview
//!
//! Bounceback notices when a visitor is about to leave a page and runs a
//! callback first. It does not bind to any browser API. The host translates its
//! own events into [`Signal`](crate::types::Signal) values and provides the few
//! capabilities detection needs: a [`Store`](bounceback_store::Store) for the
//! visited marker, a [`Navigator`](crate::history::Navigator) for history
//! manipulation, and a [`Page`](crate::page::Page) describing the document.
//!
//! ## Strategies
//!
//! - Mouse ([`mouse`]): the last ten pointer positions must trend upward by
//!   more than the sensitivity, and the pointer must leave the viewport within
//!   `distance` pixels of the top. Scrolling suppresses detection for a while.
//! - History ([`history`]): a marked entry is slipped in behind the current
//!   page, so pressing back lands on it and reveals the intent to leave.
//!   Engines without history state get a fragment-based fallback.
//!
//! [`Method::Auto`](crate::types::Method::Auto) picks history on mobile user
//! agents and the mouse everywhere else ([`classify`]).
//!
//! ## Gating
//!
//! Every qualifying bounce goes through one [`BounceGate`](crate::gate::BounceGate),
//! which runs the callback at most `max_display` times per page (`0` means
//! unlimited). Detection arms at most once per page, and only when the visitor
//! has no visited marker yet (or `aggressive` is set).
//!
//! ## Workflow
//!
//! 1) Build a [`Controller`](crate::controller::Controller) with the page,
//!    storage, and navigator the host supports.
//! 2) Call [`init`](crate::controller::Controller::init) with
//!    [`Options`](crate::config::Options); calling it again is harmless.
//! 3) Forward events through [`handle`](crate::controller::Controller::handle)
//!    and keep the clock current with
//!    [`advance`](crate::controller::Controller::advance).
//!
//! ```
//! use bounceback::config::Options;
//! use bounceback::controller::Controller;
//! use bounceback::history::Navigator;
//! use bounceback::page::Page;
//! use bounceback::types::{Delivery, Outcome, RelatedTarget, Signal};
//! use bounceback_store::{MemoryCookieJar, MemoryStore, Storage};
//! use kurbo::Point;
//!
//! let page = Page::new("Mozilla/5.0 (X11; Linux x86_64)", "example.com");
//! let storage: Storage<MemoryStore, MemoryCookieJar> =
//!     Storage::select(Some(MemoryStore::new()), None);
//! // This host cannot manipulate history, so only the mouse strategy works.
//! let nav: Navigator = Navigator::Unsupported;
//! let mut ctl = Controller::new(page, storage, nav);
//! ctl.init(Options::new().on_bounce(|| { /* show the offer */ }));
//!
//! for y in [400.0, 360.0, 320.0, 280.0, 240.0, 200.0, 160.0, 120.0, 80.0, 40.0] {
//!     ctl.handle(Signal::PointerMove(Point::new(500.0, y)));
//! }
//! let out = ctl.handle(Signal::PointerLeave {
//!     point: Point::new(500.0, 10.0),
//!     related: RelatedTarget::None,
//! });
//! assert_eq!(out, Outcome::Bounce(Delivery::Invoked));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classify;
pub mod config;
pub mod controller;
pub mod gate;
pub mod history;
pub mod mouse;
pub mod page;
pub mod types;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
