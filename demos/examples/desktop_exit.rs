// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse strategy on a desktop browser.
//!
//! Feeds an upward pointer path, a scroll, and two top-edge exits. The exit
//! right after the scroll is suppressed; the later one fires the callback.
//!
//! Run:
//! - `cargo run -p bounceback_demos --example desktop_exit`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use bounceback::config::Options;
use bounceback::controller::Controller;
use bounceback::history::Navigator;
use bounceback::page::Page;
use bounceback::types::{Delivery, Outcome, RelatedTarget, Signal};
use bounceback_store::{LocalStore, MemoryStore, Store};
use kurbo::Point;

fn main() {
    let page = Page::new(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36",
        "shop.example",
    );
    let nav: Navigator = Navigator::Unsupported;
    let mut ctl = Controller::new(page, LocalStore::new(MemoryStore::new()), nav);

    let shown = Rc::new(Cell::new(0));
    let counter = shown.clone();
    ctl.init(Options::new().max_display(0).on_bounce(move || {
        counter.set(counter.get() + 1);
        println!("  -> offer shown");
    }));
    println!("== Armed ==\n  {:?}", ctl.strategy());
    println!(
        "  visited marker: {:?}",
        ctl.store().get(&ctl.config().store_name)
    );

    for y in (0..10).map(|i| 420.0 - 40.0 * f64::from(i)) {
        ctl.handle(Signal::PointerMove(Point::new(800.0, y)));
    }
    let exit = Signal::PointerLeave {
        point: Point::new(800.0, 12.0),
        related: RelatedTarget::None,
    };

    ctl.handle(Signal::Scroll);
    let suppressed = ctl.handle(exit);
    println!("== Exit during scroll ==\n  {suppressed:?}");

    ctl.advance(Duration::from_millis(600));
    let fired = ctl.handle(exit);
    println!("== Exit after scroll settles ==\n  {fired:?}");

    assert_eq!(suppressed, Outcome::Handled);
    assert_eq!(fired, Outcome::Bounce(Delivery::Invoked));
    assert_eq!(shown.get(), 1);
}
