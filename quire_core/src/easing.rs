// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for time-driven animations.

/// Maps linear time progress onto animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Progress equals time.
    Linear,
    /// Quadratic ease-in-out: accelerates through the first half, decelerates
    /// through the second.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    ///
    /// Every curve maps 0 to 0 and 1 to 1.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}
