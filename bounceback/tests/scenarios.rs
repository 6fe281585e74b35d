// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end runs across the four browser classes: desktop and mobile, each
//! with and without modern storage and history APIs.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use bounceback::config::Options;
use bounceback::controller::Controller;
use bounceback::history::{EntryState, MemoryFragments, MemoryHistory, Navigator, SENTINEL};
use bounceback::page::Page;
use bounceback::types::{Delivery, Outcome, RelatedTarget, Signal, Signals, Strategy};
use bounceback_store::{MemoryCookieJar, MemoryStore, Storage, StorageKind, Store};
use kurbo::Point;

const DESKTOP: &str = "Mozilla/5.0 (Windows NT 6.3; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.71 Safari/537.36";
const MOBILE: &str = "Mozilla/5.0 (Linux; Android 4.2.1; en-us; Nexus 5 Build/JOP40D) AppleWebKit/535.19 (KHTML, like Gecko) Chrome/18.0.1025.166 Mobile Safari/535.19";

type Host = Controller<Storage<MemoryStore, MemoryCookieJar>, MemoryHistory, MemoryFragments>;

/// A host with every capability (`modern`) or only cookies and fragments.
fn host(user_agent: &str, modern: bool) -> Host {
    let page = Page::new(user_agent, "localhost");
    let jar = MemoryCookieJar::at(1_700_000_000);
    let fragments = MemoryFragments::new("this-will-be-clobbered");
    let (storage, nav) = if modern {
        (
            Storage::select(Some(MemoryStore::new()), Some(jar)),
            Navigator::select(Some(MemoryHistory::new()), Some(fragments)),
        )
    } else {
        (
            Storage::select(None, Some(jar)),
            Navigator::select(None, Some(fragments)),
        )
    };
    Controller::new(page, storage, nav)
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    (calls, move || seen.set(seen.get() + 1))
}

const TRAJECTORY: [(f64, f64); 10] = [
    (1120.0, 279.0),
    (1120.0, 278.0),
    (1121.0, 276.0),
    (1124.0, 273.0),
    (1129.0, 266.0),
    (1141.0, 251.0),
    (1167.0, 224.0),
    (1211.0, 173.0),
    (1266.0, 111.0),
    (1331.0, 38.0),
];

fn top_exit() -> Signal {
    Signal::PointerLeave {
        point: Point::new(1331.0, 80.0),
        related: RelatedTarget::Root,
    }
}

fn move_upward(ctl: &mut Host) {
    for (x, y) in TRAJECTORY {
        assert_eq!(ctl.handle(Signal::PointerMove(Point::new(x, y))), Outcome::Handled);
    }
}

fn desktop_suite(modern: bool) {
    let mut ctl = host(DESKTOP, modern);
    let (calls, on_bounce) = counter();
    ctl.init(
        Options::new()
            .max_display(2)
            .cookie_life(1)
            .store_name("testStoreName")
            .on_bounce(on_bounce),
    );
    assert!(ctl.is_armed());
    assert_eq!(ctl.strategy(), Some(Strategy::Mouse));
    assert_eq!(ctl.store().get("testStoreName"), "1");
    let expected = if modern {
        StorageKind::Local
    } else {
        StorageKind::Cookie
    };
    assert_eq!(ctl.store().kind(), expected);

    // Repeated init must not register anything twice.
    ctl.init(Options::new()).init(Options::new());
    assert_eq!(
        ctl.listeners(),
        Signals::POINTER_MOVE | Signals::POINTER_LEAVE | Signals::SCROLL
    );

    move_upward(&mut ctl);
    assert_eq!(ctl.handle(top_exit()), Outcome::Bounce(Delivery::Invoked));
    assert_eq!(calls.get(), 1);

    // A scroll right before the exit hides it.
    ctl.handle(Signal::Scroll);
    assert_eq!(ctl.handle(top_exit()), Outcome::Handled);
    assert_eq!(calls.get(), 1);
    ctl.advance(Duration::from_millis(500));

    // The second display is the last one allowed.
    assert_eq!(ctl.handle(top_exit()), Outcome::Bounce(Delivery::Invoked));
    assert_eq!(ctl.handle(top_exit()), Outcome::Bounce(Delivery::Capped));
    assert_eq!(calls.get(), 2);

    assert!(ctl.disable().is_disabled());
    assert!(!ctl.enable().is_disabled());
}

#[test]
fn older_desktop() {
    desktop_suite(false);
}

#[test]
fn modern_desktop() {
    desktop_suite(true);
}

#[test]
fn older_desktop_writes_expiring_cookie() {
    let mut ctl = host(DESKTOP, false);
    ctl.init(Options::new().cookie_life(1).store_name("testStoreName"));
    let Storage::Cookie(cookies) = ctl.store() else {
        panic!("expected cookie storage");
    };
    assert_eq!(
        cookies.jar().written(),
        &["testStoreName=1; expires=Wed, 15 Nov 2023 22:13:20 GMT;path=/;"]
    );
}

#[test]
fn older_mobile() {
    let mut ctl = host(MOBILE, false);
    let (calls, on_bounce) = counter();
    ctl.init(Options::new().on_bounce(on_bounce));
    assert_eq!(ctl.strategy(), Some(Strategy::History));
    assert_eq!(ctl.listeners(), Signals::HASH_CHANGE);

    let Navigator::Fragment(fragments) = ctl.navigator_mut() else {
        panic!("expected fragment navigator");
    };
    assert_eq!(fragments.entries().len(), 2);
    assert!(fragments.entries()[0].ends_with(SENTINEL));
    assert!(fragments.back());
    assert_eq!(ctl.handle(Signal::HashChange), Outcome::Bounce(Delivery::Invoked));
    assert_eq!(calls.get(), 1);
    // Popstate was never registered in this variant.
    assert_eq!(ctl.handle(Signal::PopState), Outcome::Unhandled);
}

#[test]
fn modern_mobile() {
    let mut ctl = host(MOBILE, true);
    let (calls, on_bounce) = counter();
    ctl.init(Options::new().on_bounce(on_bounce));
    assert_eq!(ctl.listeners(), Signals::POP_STATE);

    let Navigator::State(history) = ctl.navigator_mut() else {
        panic!("expected state navigator");
    };
    assert_eq!(history.entries(), &[Some(EntryState::BOUNCING), None]);
    assert!(history.back());
    assert_eq!(ctl.handle(Signal::PopState), Outcome::Bounce(Delivery::Invoked));
    assert_eq!(calls.get(), 1);
    // Mouse signals are not listened to on mobile.
    assert_eq!(ctl.handle(top_exit()), Outcome::Unhandled);
}

#[test]
fn second_page_view_stays_unarmed() {
    let mut first = host(DESKTOP, true);
    first.init(Options::new());
    let Storage::Local(local) = first.store() else {
        panic!("expected local storage");
    };
    let persisted = local.backend().clone();

    let page = Page::new(DESKTOP, "localhost");
    let nav: Navigator<MemoryHistory, MemoryFragments> =
        Navigator::select(Some(MemoryHistory::new()), None);
    let mut second: Host = Controller::new(page, Storage::select(Some(persisted), None), nav);
    second.init(Options::new());
    assert!(!second.is_armed());
    assert_eq!(second.handle(top_exit()), Outcome::Unhandled);
}

#[test]
fn unavailable_storage_always_arms() {
    for _ in 0..2 {
        let nav: Navigator<MemoryHistory, MemoryFragments> = Navigator::Unsupported;
        let mut ctl: Host =
            Controller::new(Page::new(DESKTOP, "localhost"), Storage::Unavailable, nav);
        ctl.init(Options::new());
        assert!(ctl.is_armed());
    }
}

#[test]
fn history_without_any_navigation_is_inert() {
    let nav: Navigator<MemoryHistory, MemoryFragments> = Navigator::select(None, None);
    let mut ctl: Host = Controller::new(
        Page::new(MOBILE, "localhost"),
        Storage::select(Some(MemoryStore::new()), None),
        nav,
    );
    ctl.init(Options::new());
    assert!(ctl.is_armed());
    assert_eq!(ctl.strategy(), Some(Strategy::History));
    assert!(ctl.listeners().is_empty());
    assert_eq!(ctl.handle(Signal::PopState), Outcome::Unhandled);
}

#[test]
fn direct_on_bounce_shares_the_cap() {
    let mut ctl = host(DESKTOP, true);
    let (calls, on_bounce) = counter();
    ctl.init(Options::new().max_display(1).on_bounce(on_bounce));
    assert_eq!(ctl.on_bounce(), Delivery::Invoked);
    move_upward(&mut ctl);
    assert_eq!(ctl.handle(top_exit()), Outcome::Bounce(Delivery::Capped));
    assert_eq!(calls.get(), 1);
}
