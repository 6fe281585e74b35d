// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse strategy: detect an upward exit through the top of the viewport.
//!
//! ## Signals
//!
//! - Pointer moves are pushed onto a window of the [`SAMPLE_WINDOW`] most recent
//!   positions, newest first.
//! - A pointer leave qualifies as a bounce when it is a viewport exit, close
//!   enough to the top, and the full window shows net upward travel above the
//!   sensitivity threshold.
//! - Scrolling suppresses qualification until the scroll delay has elapsed
//!   since the last scroll (see [`ScrollGuard`]).
//!
//! ```
//! use bounceback::config::Config;
//! use bounceback::mouse::MouseStrategy;
//! use bounceback::types::RelatedTarget;
//! use core::time::Duration;
//! use kurbo::Point;
//!
//! let config = Config::default();
//! let mut mouse = MouseStrategy::new();
//! for y in (0..10).map(|i| 300.0 - 30.0 * f64::from(i)) {
//!     mouse.on_pointer_move(Point::new(640.0, y));
//! }
//! let exit = Point::new(640.0, 20.0);
//! assert!(mouse.qualifies(exit, RelatedTarget::None, Duration::ZERO, &config));
//! ```

use alloc::collections::VecDeque;
use core::time::Duration;

use kurbo::Point;

use crate::config::Config;
use crate::types::RelatedTarget;

/// Number of recent pointer positions kept for the trend check.
pub const SAMPLE_WINDOW: usize = 10;

/// Post-scroll suppression with a single pending deadline.
///
/// Each scroll replaces the deadline, which is the host-clock equivalent of
/// cancelling the outstanding un-suppress timer and scheduling a fresh one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollGuard {
    until: Option<Duration>,
}

impl ScrollGuard {
    /// A guard with nothing pending.
    pub const fn new() -> Self {
        Self { until: None }
    }

    /// Record a scroll at `now`. A zero `delay` disables suppression.
    pub fn on_scroll(&mut self, now: Duration, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        self.until = Some(now.saturating_add(delay));
    }

    /// Whether detection is suppressed at `now`.
    pub fn is_suppressed(&self, now: Duration) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// The pending un-suppress deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.until
    }
}

/// Trajectory tracker for the mouse strategy.
#[derive(Clone, Debug, Default)]
pub struct MouseStrategy {
    samples: VecDeque<Point>,
    guard: ScrollGuard,
}

impl MouseStrategy {
    /// A tracker with an empty window.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(SAMPLE_WINDOW + 1),
            guard: ScrollGuard::new(),
        }
    }

    /// Buffered positions, newest first.
    pub fn samples(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().copied()
    }

    /// Number of buffered positions.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no position is buffered.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record a pointer position.
    pub fn on_pointer_move(&mut self, pt: Point) {
        self.samples.push_front(pt);
        self.samples.truncate(SAMPLE_WINDOW);
    }

    /// Record a scroll at `now`.
    pub fn on_scroll(&mut self, now: Duration, delay: Duration) {
        self.guard.on_scroll(now, delay);
    }

    /// The scroll guard.
    pub fn guard(&self) -> &ScrollGuard {
        &self.guard
    }

    /// Whether detection is suppressed at `now`.
    pub fn is_suppressed(&self, now: Duration) -> bool {
        self.guard.is_suppressed(now)
    }

    /// Whether a pointer leave at `exit` qualifies as a bounce.
    ///
    /// The user-facing disabled flag is checked by the caller.
    pub fn qualifies(
        &self,
        exit: Point,
        related: RelatedTarget,
        now: Duration,
        config: &Config,
    ) -> bool {
        if self.is_suppressed(now) {
            log::trace!("pointer leave ignored: suppressed after scroll");
            return false;
        }
        if !related.is_viewport_exit() || exit.y > config.distance {
            return false;
        }
        if self.samples.len() != SAMPLE_WINDOW {
            return false;
        }
        let newest = self.samples[0];
        let oldest = self.samples[SAMPLE_WINDOW - 1];
        // y grows downward: an upward trend means the newest sample is higher.
        newest.y < oldest.y && oldest.y - newest.y > config.sensitivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // Cursor path recorded from a real exit toward the browser tab strip.
    const UPWARD: [(f64, f64); 10] = [
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

    fn upward() -> MouseStrategy {
        let mut m = MouseStrategy::new();
        for (x, y) in UPWARD {
            m.on_pointer_move(Point::new(x, y));
        }
        m
    }

    #[test]
    fn window_is_newest_first_and_bounded() {
        let mut m = MouseStrategy::new();
        for i in 0..25 {
            m.on_pointer_move(Point::new(0.0, f64::from(i)));
        }
        let ys: Vec<f64> = m.samples().map(|p| p.y).collect();
        assert_eq!(ys.len(), SAMPLE_WINDOW);
        assert_eq!(ys[0], 24.0);
        assert_eq!(ys[SAMPLE_WINDOW - 1], 15.0);
    }

    #[test]
    fn upward_exit_near_top_qualifies() {
        let m = upward();
        let c = Config::default();
        assert!(m.qualifies(Point::new(1331.0, 80.0), RelatedTarget::Root, ms(0), &c));
        assert!(m.qualifies(Point::new(1331.0, 80.0), RelatedTarget::None, ms(0), &c));
    }

    #[test]
    fn exit_into_child_element_is_ignored() {
        let m = upward();
        let c = Config::default();
        assert!(!m.qualifies(Point::new(1331.0, 80.0), RelatedTarget::Element, ms(0), &c));
    }

    #[test]
    fn exit_distance_is_inclusive() {
        let m = upward();
        let c = Config::default();
        assert!(m.qualifies(Point::new(0.0, 100.0), RelatedTarget::None, ms(0), &c));
        assert!(!m.qualifies(Point::new(0.0, 100.5), RelatedTarget::None, ms(0), &c));
    }

    #[test]
    fn short_window_never_qualifies() {
        let mut m = MouseStrategy::new();
        for (x, y) in &UPWARD[..SAMPLE_WINDOW - 1] {
            m.on_pointer_move(Point::new(*x, *y));
        }
        let c = Config::default();
        assert!(!m.qualifies(Point::new(0.0, 0.0), RelatedTarget::None, ms(0), &c));
    }

    #[test]
    fn downward_or_sideways_exit_is_ignored() {
        let c = Config::default();
        let mut down = MouseStrategy::new();
        for (x, y) in UPWARD.iter().rev() {
            down.on_pointer_move(Point::new(*x, *y));
        }
        assert!(!down.qualifies(Point::new(0.0, 10.0), RelatedTarget::None, ms(0), &c));

        let mut flat = MouseStrategy::new();
        for i in 0..10 {
            flat.on_pointer_move(Point::new(f64::from(i) * 40.0, 50.0));
        }
        assert!(!flat.qualifies(Point::new(400.0, 50.0), RelatedTarget::None, ms(0), &c));
    }

    #[test]
    fn travel_must_exceed_sensitivity() {
        let mut m = MouseStrategy::new();
        // Net upward travel of exactly 9 px.
        for i in 0..10 {
            m.on_pointer_move(Point::new(0.0, 60.0 - f64::from(i)));
        }
        let mut c = Config::default();
        c.sensitivity = 9.0;
        assert!(!m.qualifies(Point::new(0.0, 50.0), RelatedTarget::None, ms(0), &c));
        c.sensitivity = 8.0;
        assert!(m.qualifies(Point::new(0.0, 50.0), RelatedTarget::None, ms(0), &c));
    }

    #[test]
    fn scroll_suppresses_until_delay_after_last_scroll() {
        let mut m = upward();
        let c = Config::default();
        let exit = Point::new(0.0, 20.0);
        m.on_scroll(ms(1_000), c.scroll_delay);
        assert!(!m.qualifies(exit, RelatedTarget::None, ms(1_000), &c));
        m.on_scroll(ms(1_400), c.scroll_delay);
        assert!(!m.qualifies(exit, RelatedTarget::None, ms(1_600), &c));
        assert_eq!(m.guard().deadline(), Some(ms(1_900)));
        assert!(!m.qualifies(exit, RelatedTarget::None, ms(1_899), &c));
        assert!(m.qualifies(exit, RelatedTarget::None, ms(1_900), &c));
    }

    #[test]
    fn zero_delay_never_suppresses() {
        let mut g = ScrollGuard::new();
        g.on_scroll(ms(5), Duration::ZERO);
        assert_eq!(g.deadline(), None);
        assert!(!g.is_suppressed(ms(5)));
    }
}
