// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot growth counter.
//!
//! The counter climbs from [`GrowthConfig::start`] to [`GrowthConfig::end`]
//! along a `progress²` curve, so it starts slowly and accelerates. It runs
//! at most once per page load:
//!
//! ```text
//!   Idle ──trigger()──► Armed ──delay──► Running ──duration──► Finished
//! ```

use core::fmt;

use crate::config::GrowthConfig;
use crate::time::HostTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed { reveal_at: HostTime },
    Running { started_at: HostTime },
    Finished,
}

/// Where a [`GrowthSample`] falls in the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SamplePhase {
    /// The count is still climbing.
    Counting,
    /// Last frame; the value is pinned from now on.
    Finished,
}

/// The counter value for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthSample {
    /// Displayed multiplier.
    pub value: u32,
    /// Position in the animation.
    pub phase: SamplePhase,
    /// Set on the first sample after the delay: the graph should be shown.
    pub reveal: bool,
}

impl fmt::Display for GrowthSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            SamplePhase::Finished => write!(f, "{}x+", self.value),
            SamplePhase::Counting => write!(f, "{}x", self.value),
        }
    }
}

/// Drives the growth counter from frame timestamps.
#[derive(Clone, Copy, Debug)]
pub struct GrowthCounter {
    config: GrowthConfig,
    phase: Phase,
}

impl GrowthCounter {
    /// Creates an idle counter.
    #[must_use]
    pub const fn new(config: GrowthConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    /// Arms the counter to start after the configured delay.
    ///
    /// Returns `false` (and changes nothing) if it was triggered before.
    pub fn trigger(&mut self, now: HostTime) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Armed {
            reveal_at: now.saturating_add(self.config.delay),
        };
        true
    }

    /// Arms the counter the first time `graph_page` is the page at rest.
    ///
    /// Call whenever the layout settles on `current`. Nothing happens when no
    /// graph page is configured, when the graph cannot be shown, or once the
    /// counter has been armed before. Returns `true` only on the arming call.
    pub fn page_shown(
        &mut self,
        current: usize,
        graph_page: Option<usize>,
        graph_present: bool,
        now: HostTime,
    ) -> bool {
        if graph_page != Some(current) || !graph_present {
            return false;
        }
        self.trigger(now)
    }

    /// Returns `true` until [`trigger`](Self::trigger) has been accepted.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Returns `true` while armed or counting, i.e. while frames are needed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. } | Phase::Running { .. })
    }

    /// Returns `true` once the final value has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Advances to `now` and returns the value to display, if any.
    ///
    /// Nothing is produced before the trigger, during the delay, or after the
    /// final sample.
    pub fn sample(&mut self, now: HostTime) -> Option<GrowthSample> {
        let (started_at, reveal) = match self.phase {
            Phase::Idle | Phase::Finished => return None,
            Phase::Armed { reveal_at } if now < reveal_at => return None,
            Phase::Armed { reveal_at } => {
                self.phase = Phase::Running {
                    started_at: reveal_at,
                };
                (reveal_at, true)
            }
            Phase::Running { started_at } => (started_at, false),
        };

        let progress = now
            .saturating_duration_since(started_at)
            .fraction_of(self.config.duration);
        let value = self.value_at(progress);

        let phase = if progress >= 1.0 {
            self.phase = Phase::Finished;
            SamplePhase::Finished
        } else {
            SamplePhase::Counting
        };
        Some(GrowthSample {
            value,
            phase,
            reveal,
        })
    }

    /// Counter value at linear `progress` in `[0, 1]`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value lies between start and end, both u32; truncation is the floor"
    )]
    pub fn value_at(&self, progress: f64) -> u32 {
        let p = progress.clamp(0.0, 1.0);
        let start = f64::from(self.config.start);
        let span = f64::from(self.config.end.saturating_sub(self.config.start));
        (start + p * p * span) as u32
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;
    use crate::time::Duration;

    fn counter() -> GrowthCounter {
        GrowthCounter::new(GrowthConfig::standard())
    }

    fn at_ms(ms: u64) -> HostTime {
        HostTime(Duration::from_millis(ms).micros())
    }

    #[test]
    fn idle_counter_produces_nothing() {
        let mut c = counter();
        assert!(c.is_idle());
        assert_eq!(c.sample(at_ms(5_000)), None);
    }

    #[test]
    fn waits_for_delay_then_reveals() {
        let mut c = counter();
        assert!(c.trigger(at_ms(1_000)));
        assert!(c.is_active());
        assert_eq!(c.sample(at_ms(1_050)), None);

        let first = c.sample(at_ms(1_100)).expect("revealed after delay");
        assert!(first.reveal);
        assert_eq!(first.phase, SamplePhase::Counting);
        assert_eq!(first.value, 1);
        assert_eq!(first.to_string(), "1x");

        let mid = c.sample(at_ms(1_100 + 3_500)).expect("counting");
        assert_eq!(mid.phase, SamplePhase::Counting);
        assert!(!mid.reveal);
        // 1 + 0.25 * 99 = 25.75
        assert_eq!(mid.value, 25);
    }

    #[test]
    fn finishes_pinned_at_end() {
        let mut c = counter();
        c.trigger(at_ms(0));
        c.sample(at_ms(100));
        let last = c.sample(at_ms(100 + 7_000)).expect("final sample");
        assert_eq!(last.phase, SamplePhase::Finished);
        assert_eq!(last.value, 100);
        assert_eq!(last.to_string(), "100x+");
        assert!(c.is_finished());
        assert_eq!(c.sample(at_ms(20_000)), None);
    }

    #[test]
    fn fires_at_most_once() {
        let mut c = counter();
        assert!(c.trigger(at_ms(0)));
        assert!(!c.trigger(at_ms(50)));
        c.sample(at_ms(100));
        c.sample(at_ms(8_000));
        assert!(c.is_finished());
        assert!(!c.trigger(at_ms(9_000)));
        assert_eq!(c.sample(at_ms(9_200)), None);
    }

    #[test]
    fn late_first_frame_still_reveals() {
        let mut c = counter();
        c.trigger(at_ms(0));
        let s = c.sample(at_ms(10_000)).expect("one sample");
        assert!(s.reveal);
        assert_eq!(s.phase, SamplePhase::Finished);
        assert_eq!(s.value, 100);
    }

    #[test]
    fn values_never_decrease() {
        let mut c = counter();
        c.trigger(at_ms(0));
        let values: Vec<u32> = (0..=80)
            .filter_map(|i| c.sample(at_ms(100 + i * 100)))
            .map(|s| s.value)
            .collect();
        assert!(values.len() > 60);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.first(), Some(&1));
        assert_eq!(values.last(), Some(&100));
    }

    #[test]
    fn value_curve_is_quadratic() {
        let c = counter();
        assert_eq!(c.value_at(0.0), 1);
        assert_eq!(c.value_at(0.1), 1);
        assert_eq!(c.value_at(0.5), 25);
        assert_eq!(c.value_at(0.9), 81);
        assert_eq!(c.value_at(1.0), 100);
        assert_eq!(c.value_at(2.0), 100);
    }

    #[test]
    fn arms_only_on_the_graph_page() {
        let mut c = counter();
        assert!(!c.page_shown(3, Some(4), true, at_ms(0)));
        assert!(!c.page_shown(0, None, true, at_ms(0)));
        assert!(c.is_idle());

        assert!(c.page_shown(4, Some(4), true, at_ms(10)));
        assert!(c.is_active());
        assert_eq!(c.sample(at_ms(109)), None);
        assert!(c.sample(at_ms(110)).is_some_and(|s| s.reveal));
    }

    #[test]
    fn missing_graph_never_arms() {
        let mut c = counter();
        assert!(!c.page_shown(4, Some(4), false, at_ms(0)));
        assert!(c.is_idle());
        assert_eq!(c.sample(at_ms(1_000)), None);
    }

    #[test]
    fn revisiting_the_graph_page_does_not_rearm() {
        let mut c = counter();
        assert!(c.page_shown(4, Some(4), true, at_ms(0)));
        assert!(!c.page_shown(4, Some(4), true, at_ms(50)));
        assert!(c.sample(at_ms(10_000)).is_some());
        assert!(c.is_finished());
        assert!(!c.page_shown(4, Some(4), true, at_ms(20_000)));
        assert!(c.is_finished());
    }
}
