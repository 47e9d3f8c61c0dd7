// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input interpretation.
//!
//! Raw browser input (key names, touch points, click positions) is reduced
//! to a [`NavIntent`] here so the DOM layer only forwards values.

use kurbo::{Point, Vec2};

use crate::config::SwipeConfig;
use crate::time::HostTime;

/// A request to move through the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    /// Turn to the following page.
    Next,
    /// Turn back to the preceding page.
    Previous,
}

/// Maps a `KeyboardEvent.key` value to an intent.
#[must_use]
pub fn intent_for_key(key: &str) -> Option<NavIntent> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(NavIntent::Next),
        "ArrowLeft" | "ArrowUp" => Some(NavIntent::Previous),
        _ => None,
    }
}

/// Maps a click at horizontal position `x` in a viewport `width` pixels wide.
///
/// The left half goes back, the right half (including the midline) goes
/// forward.
#[must_use]
pub fn intent_for_click(x: f64, width: f64) -> NavIntent {
    if x < width / 2.0 {
        NavIntent::Previous
    } else {
        NavIntent::Next
    }
}

/// A recognised swipe gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    /// Where the gesture navigates.
    pub intent: NavIntent,
    /// Total finger travel.
    pub delta: Vec2,
    /// Horizontal speed in pixels per millisecond.
    pub velocity_x: f64,
}

/// Turns a touch start/end pair into a [`Swipe`].
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<(Point, HostTime)>,
}

impl SwipeTracker {
    /// Creates a tracker with no gesture in progress.
    #[must_use]
    pub const fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Records where and when a touch began.
    pub fn begin(&mut self, at: Point, now: HostTime) {
        self.start = Some((at, now));
    }

    /// Finishes the gesture at `at`.
    ///
    /// Horizontal travel wins when it dominates; otherwise vertical travel is
    /// considered. Swiping left or up goes forward. Returns `None` for short
    /// gestures and for an end without a matching start.
    pub fn end(&mut self, at: Point, now: HostTime) -> Option<Swipe> {
        let (origin, started) = self.start.take()?;
        let delta = at - origin;
        let threshold = self.config.threshold_px;

        let intent = if delta.x.abs() > delta.y.abs() && delta.x.abs() > threshold {
            if delta.x > 0.0 {
                NavIntent::Previous
            } else {
                NavIntent::Next
            }
        } else if delta.y.abs() > threshold {
            if delta.y < 0.0 {
                NavIntent::Next
            } else {
                NavIntent::Previous
            }
        } else {
            return None;
        };

        let elapsed_ms = now.saturating_duration_since(started).as_millis_f64();
        let velocity_x = if elapsed_ms > 0.0 {
            delta.x.abs() / elapsed_ms
        } else {
            0.0
        };

        Some(Swipe {
            intent,
            delta,
            velocity_x,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: (f64, f64), to: (f64, f64)) -> Option<NavIntent> {
        let mut tracker = SwipeTracker::new(SwipeConfig::standard());
        tracker.begin(Point::new(from.0, from.1), HostTime(0));
        tracker
            .end(Point::new(to.0, to.1), HostTime(200_000))
            .map(|s| s.intent)
    }

    #[test]
    fn arrow_keys() {
        assert_eq!(intent_for_key("ArrowRight"), Some(NavIntent::Next));
        assert_eq!(intent_for_key("ArrowDown"), Some(NavIntent::Next));
        assert_eq!(intent_for_key("ArrowLeft"), Some(NavIntent::Previous));
        assert_eq!(intent_for_key("ArrowUp"), Some(NavIntent::Previous));
        assert_eq!(intent_for_key("Enter"), None);
        assert_eq!(intent_for_key("arrowright"), None);
    }

    #[test]
    fn screen_halves() {
        assert_eq!(intent_for_click(10.0, 1000.0), NavIntent::Previous);
        assert_eq!(intent_for_click(499.9, 1000.0), NavIntent::Previous);
        assert_eq!(intent_for_click(500.0, 1000.0), NavIntent::Next);
        assert_eq!(intent_for_click(990.0, 1000.0), NavIntent::Next);
    }

    #[test]
    fn horizontal_swipes() {
        assert_eq!(swipe((300.0, 100.0), (100.0, 120.0)), Some(NavIntent::Next));
        assert_eq!(swipe((100.0, 100.0), (300.0, 80.0)), Some(NavIntent::Previous));
    }

    #[test]
    fn vertical_swipes() {
        assert_eq!(swipe((100.0, 400.0), (110.0, 200.0)), Some(NavIntent::Next));
        assert_eq!(swipe((100.0, 200.0), (90.0, 400.0)), Some(NavIntent::Previous));
    }

    #[test]
    fn short_gestures_are_ignored() {
        assert_eq!(swipe((100.0, 100.0), (150.0, 100.0)), None);
        assert_eq!(swipe((100.0, 100.0), (100.0, 60.0)), None);
        assert_eq!(swipe((100.0, 100.0), (100.0, 100.0)), None);
    }

    #[test]
    fn dominant_short_horizontal_falls_back_to_vertical() {
        // |dx| > |dy| but under threshold, |dy| under threshold too.
        assert_eq!(swipe((0.0, 0.0), (45.0, 40.0)), None);
        // Diagonal with equal travel is not horizontal; vertical decides.
        assert_eq!(swipe((0.0, 0.0), (80.0, 80.0)), Some(NavIntent::Previous));
    }

    #[test]
    fn end_without_begin_yields_nothing() {
        let mut tracker = SwipeTracker::new(SwipeConfig::standard());
        assert!(tracker.end(Point::new(500.0, 0.0), HostTime(10)).is_none());
    }

    #[test]
    fn gesture_is_consumed() {
        let mut tracker = SwipeTracker::new(SwipeConfig::standard());
        tracker.begin(Point::new(0.0, 0.0), HostTime(0));
        assert!(tracker.end(Point::new(-200.0, 0.0), HostTime(100_000)).is_some());
        assert!(tracker.end(Point::new(-200.0, 0.0), HostTime(200_000)).is_none());
    }

    #[test]
    fn velocity_is_pixels_per_millisecond() {
        let mut tracker = SwipeTracker::new(SwipeConfig::standard());
        tracker.begin(Point::new(400.0, 0.0), HostTime(0));
        let swipe = tracker
            .end(Point::new(200.0, 0.0), HostTime(100_000))
            .expect("long horizontal swipe");
        assert_eq!(swipe.intent, NavIntent::Next);
        assert!((swipe.velocity_x - 2.0).abs() < 1e-12);
        assert_eq!(swipe.delta, Vec2::new(-200.0, 0.0));
    }
}
