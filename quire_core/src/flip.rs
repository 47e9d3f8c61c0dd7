// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame page-turn pose.
//!
//! A turn is a closed-form function of eased progress in `[0, 1]`. Every
//! parameter is derived from the *animation* progress `p`, which runs 0→1 for
//! a forward turn and 1→0 for a backward one, so a backward turn replays the
//! forward curl, lift and shadow in reverse:
//!
//! | parameter | value |
//! |-----------|-------|
//! | rotation  | `-180·progress` forward, `-180 + 180·progress` backward |
//! | curl      | `sin(pπ) · curl_max` |
//! | bend      | triangular ramp `2p` / `2(1 - p)` · `bend_max_deg` |
//! | lift      | `sin(pπ) · lift_max_px` |
//! | skew      | `sin(pπ) · skew_max_deg`, half applied |
//! | shadow    | opacity `sin(pπ) · max`, blur `base + sin(pπ) · range` |
//!
//! When progress reaches 1 the page snaps to [`FlipPose::settled`].

use core::f64::consts::PI;
use core::fmt;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::FlipConfig;
use crate::time::Duration;
use crate::transform::Transform3d;

/// Which way a page turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    /// The visible page turns away, revealing the next one.
    Forward,
    /// A turned page comes back over the visible one.
    Backward,
}

/// Ambient shadow every resting page carries.
pub const RESTING_SHADOW: &str = "0 4px 8px rgba(0, 0, 0, 0.15)";

/// Contact shadow layered under the cast shadow while a page is in the air.
const CONTACT_SHADOW: &str = "0 2px 8px rgba(0, 0, 0, 0.15)";

/// A `box-shadow` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadowStyle {
    /// The flat page shadow.
    Resting,
    /// A shadow thrown by a page that is mid-turn.
    Cast {
        /// Horizontal offset, in pixels.
        offset_x: f64,
        /// Vertical offset, in pixels.
        offset_y: f64,
        /// Blur radius, in pixels.
        blur: f64,
        /// Alpha of the black shadow colour.
        opacity: f64,
    },
}

impl fmt::Display for ShadowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Resting => f.write_str(RESTING_SHADOW),
            Self::Cast {
                offset_x,
                offset_y,
                blur,
                opacity,
            } => write!(
                f,
                "{offset_x}px {offset_y}px {blur}px rgba(0, 0, 0, {opacity}), {CONTACT_SHADOW}"
            ),
        }
    }
}

/// The visual state of a turning page for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipPose {
    /// Rotation around the binding (Y axis), in degrees.
    pub rotation_deg: f64,
    /// Curl intensity; drives the shadow's horizontal offset.
    pub curl: f64,
    /// Bend around the X axis, in degrees.
    pub bend_deg: f64,
    /// Upward lift, in pixels. The page also moves `2·lift` towards the viewer.
    pub lift_px: f64,
    /// Skew amplitude, in degrees.
    pub skew_deg: f64,
    /// Page opacity.
    pub opacity: f64,
    /// Shadow thrown by the page.
    pub shadow: ShadowStyle,
}

impl FlipPose {
    /// Computes the pose at eased `progress` (clamped to `[0, 1]`).
    #[must_use]
    pub fn at(progress: f64, direction: FlipDirection, config: &FlipConfig) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let (p, rotation_deg) = match direction {
            FlipDirection::Forward => (progress, -180.0 * progress),
            FlipDirection::Backward => (1.0 - progress, -180.0 + 180.0 * progress),
        };

        let arc = (p * PI).sin();
        let curl = arc * config.curl_max;
        let bend = if p < 0.5 { p * 2.0 } else { (1.0 - p) * 2.0 };
        let lift_px = arc * config.lift_max_px;

        Self {
            rotation_deg,
            curl,
            bend_deg: bend * config.bend_max_deg,
            lift_px,
            skew_deg: arc * config.skew_max_deg,
            opacity: 1.0,
            shadow: ShadowStyle::Cast {
                offset_x: -curl * 0.5,
                offset_y: lift_px,
                blur: config.shadow_blur_base_px + arc * config.shadow_blur_range_px,
                opacity: arc * config.shadow_opacity_max,
            },
        }
    }

    /// The pose a page snaps to once its turn completes.
    ///
    /// A forward turn leaves the page face-down and transparent; a backward
    /// turn leaves it flat and opaque.
    #[must_use]
    pub const fn settled(direction: FlipDirection) -> Self {
        let (rotation_deg, opacity) = match direction {
            FlipDirection::Forward => (-180.0, 0.0),
            FlipDirection::Backward => (0.0, 1.0),
        };
        Self {
            rotation_deg,
            curl: 0.0,
            bend_deg: 0.0,
            lift_px: 0.0,
            skew_deg: 0.0,
            opacity,
            shadow: ShadowStyle::Resting,
        }
    }

    /// Composes `translateY(-lift) translateZ(2·lift) rotateY(rotation)
    /// rotateX(bend) skewY(skew / 2)`.
    #[must_use]
    pub fn transform(&self) -> Transform3d {
        Transform3d::from_translation(0.0, -self.lift_px, 2.0 * self.lift_px)
            * Transform3d::from_rotation_y(self.rotation_deg.to_radians())
            * Transform3d::from_rotation_x(self.bend_deg.to_radians())
            * Transform3d::from_skew_y((self.skew_deg * 0.5).to_radians())
    }
}

/// Eased progress of a turn that has been running for `elapsed`.
#[must_use]
pub fn flip_progress(elapsed: Duration, config: &FlipConfig) -> f64 {
    config.easing.apply(elapsed.fraction_of(config.duration))
}
