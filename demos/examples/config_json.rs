// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options from a JSON object, as a page script would pass them.
//!
//! Run:
//! - `cargo run -p bounceback_demos --example config_json`

use bounceback::config::{Config, Options};
use bounceback::types::Method;

fn main() {
    let raw = r#"{ "maxDisplay": 2, "method": "mouse", "scrollDelay": 0, "storeName": "promo-seen" }"#;
    let options: Options = match serde_json::from_str(raw) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("bad options: {err}");
            return;
        }
    };
    println!("== Parsed ==\n  {options:?}");

    let config = options
        .on_bounce(|| println!("bounce"))
        .resolve(Config::default());
    println!("== Resolved ==\n  {config:?}");

    assert_eq!(config.method, Method::Mouse);
    assert!(config.scroll_delay.is_zero());
    assert_eq!(config.store_name, "promo-seen");
}
