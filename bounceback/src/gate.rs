// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounce gate: the single chokepoint every strategy reports through.

use crate::types::Delivery;

/// Rate-limits the bounce callback to a display cap.
///
/// Every qualifying signal increments the counter, whether or not the callback
/// runs. The counter lives as long as the gate and is never reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BounceGate {
    shown: u32,
}

impl BounceGate {
    /// A gate that has seen no bounces.
    pub const fn new() -> Self {
        Self { shown: 0 }
    }

    /// Number of bounces reported so far, including capped ones.
    pub fn shown(&self) -> u32 {
        self.shown
    }

    /// Report a bounce and run `handler` unless `max_display` (non-zero) has
    /// already been reached.
    pub fn signal(&mut self, max_display: u32, handler: &mut dyn FnMut()) -> Delivery {
        self.shown = self.shown.saturating_add(1);
        if max_display == 0 || self.shown <= max_display {
            log::debug!("bounce {} delivered", self.shown);
            handler();
            Delivery::Invoked
        } else {
            log::trace!("bounce {} capped at {max_display}", self.shown);
            Delivery::Capped
        }
    }
}
