// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Analog clock hand angles.
//!
//! Angles are in degrees clockwise from twelve o'clock, ready for an SVG
//! `rotate()` around the face centre. The minute hand creeps with the
//! seconds and the hour hand with the minutes; there is no second hand.

use alloc::string::String;
use core::fmt::Write as _;

use chrono::Timelike;

/// Degrees per hour mark on a twelve-hour face.
const DEG_PER_HOUR: f64 = 30.0;
/// Degrees per minute (and per second of minute-hand travel, scaled).
const DEG_PER_MINUTE: f64 = 6.0;

/// Rotation of each hand for one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    /// Hour hand rotation.
    pub hour_deg: f64,
    /// Minute hand rotation.
    pub minute_deg: f64,
}

impl HandAngles {
    /// Computes hand angles from an hour, minute and second of the day.
    #[must_use]
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        let hours = f64::from(hours % 12);
        let minutes = f64::from(minutes);
        let seconds = f64::from(seconds);
        Self {
            hour_deg: hours * DEG_PER_HOUR + minutes * 0.5,
            minute_deg: minutes * DEG_PER_MINUTE + seconds * 0.1,
        }
    }

    /// Computes hand angles for a wall-clock time.
    #[must_use]
    pub fn from_time(time: &impl Timelike) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }

    /// SVG `transform` attribute rotating by `angle_deg` around `pivot`.
    #[must_use]
    pub fn svg_transform(angle_deg: f64, pivot: (f64, f64)) -> String {
        let mut out = String::new();
        let _ = write!(out, "rotate({angle_deg} {} {})", pivot.0, pivot.1);
        out
    }
}
