// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fragment fallback on an old mobile engine with cookies only.
//!
//! Run:
//! - `cargo run -p bounceback_demos --example legacy_fragment`

use bounceback::config::Options;
use bounceback::controller::Controller;
use bounceback::history::{MemoryFragments, Navigator, NoHistory};
use bounceback::page::Page;
use bounceback::types::{Delivery, Outcome, Signal};
use bounceback_store::{CookieStore, MemoryCookieJar};

fn main() {
    let page = Page::new("BlackBerry9700/5.0.0.351 Profile/MIDP-2.1", "m.example");
    let store = CookieStore::new(MemoryCookieJar::at(1_700_000_000));
    let nav: Navigator<NoHistory, MemoryFragments> =
        Navigator::select(None, Some(MemoryFragments::new("comments")));

    let mut ctl = Controller::new(page, store, nav);
    ctl.init(Options::new().cookie_life(30));
    println!("== Cookies written ==\n  {:?}", ctl.store().jar().written());

    let Navigator::Fragment(fragments) = ctl.navigator_mut() else {
        unreachable!("fragment history was provided");
    };
    println!("== Fragments ==\n  {:?}", fragments.entries());
    let changed = fragments.back();

    let out = if changed {
        ctl.handle(Signal::HashChange)
    } else {
        Outcome::Handled
    };
    println!("== Back pressed ==\n  {out:?}");
    assert_eq!(out, Outcome::Bounce(Delivery::Invoked));
}
