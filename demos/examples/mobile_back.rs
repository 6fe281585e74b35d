// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! History strategy on a modern mobile browser.
//!
//! The controller marks the current entry and pushes a clean one on top. The
//! simulated back button lands on the marked entry and reports a bounce.
//!
//! Run:
//! - `cargo run -p bounceback_demos --example mobile_back`

use bounceback::config::Options;
use bounceback::controller::Controller;
use bounceback::history::{MemoryHistory, Navigator, NoHistory};
use bounceback::page::Page;
use bounceback::types::{Delivery, Outcome, Signal};
use bounceback_store::{MemoryCookieJar, MemoryStore, Storage};

fn main() {
    let page = Page::new(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148",
        "news.example",
    );
    let storage: Storage<MemoryStore, MemoryCookieJar> =
        Storage::select(Some(MemoryStore::new()), Some(MemoryCookieJar::new()));
    let nav: Navigator<MemoryHistory, NoHistory> =
        Navigator::select(Some(MemoryHistory::new()), None);

    let mut ctl = Controller::new(page, storage, nav);
    ctl.init(Options::new().on_bounce(|| println!("  -> stay-on-page prompt")));

    let Navigator::State(history) = ctl.navigator_mut() else {
        unreachable!("state history was provided");
    };
    println!("== History after arming ==\n  {:?}", history.entries());
    history.back();

    let out = ctl.handle(Signal::PopState);
    println!("== Back pressed ==\n  {out:?}");
    assert_eq!(out, Outcome::Bounce(Delivery::Invoked));
}
