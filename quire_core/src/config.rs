// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable parameters for the notebook and its widgets.
//!
//! All configuration is plain data with `const fn` presets. The browser
//! entry point uses [`NotebookConfig::web()`]; tests construct variants with
//! struct update syntax.

use log::LevelFilter;

use crate::easing::Easing;
use crate::time::Duration;

/// How a page turn is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipMode {
    /// Animate the turning page frame by frame.
    Animated,
    /// Move the cursor and re-lay out all pages at once.
    Instant,
}

/// Shape and timing of the page-turn animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipConfig {
    /// Whether turns animate.
    pub mode: FlipMode,
    /// Wall time of one turn.
    pub duration: Duration,
    /// Curve applied to time progress before the pose is computed.
    pub easing: Easing,
    /// Peak curl intensity, which offsets the cast shadow horizontally.
    pub curl_max: f64,
    /// Peak X-axis bend, in degrees.
    pub bend_max_deg: f64,
    /// Peak vertical lift, in pixels.
    pub lift_max_px: f64,
    /// Peak skew amplitude, in degrees. Half of it is applied as `skewY`.
    pub skew_max_deg: f64,
    /// Peak opacity of the cast shadow.
    pub shadow_opacity_max: f64,
    /// Blur radius of the cast shadow at rest, in pixels.
    pub shadow_blur_base_px: f64,
    /// Extra blur added at mid-turn, in pixels.
    pub shadow_blur_range_px: f64,
}

impl FlipConfig {
    /// Snappy animated turns.
    #[must_use]
    pub const fn animated() -> Self {
        Self {
            mode: FlipMode::Animated,
            duration: Duration::from_millis(600),
            easing: Easing::EaseInOutQuad,
            curl_max: 25.0,
            bend_max_deg: 8.0,
            lift_max_px: 8.0,
            skew_max_deg: 3.0,
            shadow_opacity_max: 0.4,
            shadow_blur_base_px: 10.0,
            shadow_blur_range_px: 20.0,
        }
    }

    /// Turns without animation.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            mode: FlipMode::Instant,
            ..Self::animated()
        }
    }
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self::animated()
    }
}

/// Timing and range of the growth counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Pause between triggering and revealing the graph.
    pub delay: Duration,
    /// Length of the count-up.
    pub duration: Duration,
    /// Value shown when the count-up starts.
    pub start: u32,
    /// Value reached at the end of the count-up.
    pub end: u32,
}

impl GrowthConfig {
    /// One to a hundred over seven seconds.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            delay: Duration::from_millis(100),
            duration: Duration::from_secs(7),
            start: 1,
            end: 100,
        }
    }
}

/// Analog clock refresh settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockConfig {
    /// Time between hand updates.
    pub interval: Duration,
    /// Rotation pivot of the hands, in SVG user units.
    pub pivot: (f64, f64),
}

impl ClockConfig {
    /// Once a second around the centre of a 200×200 face.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            interval: Duration::from_secs(1),
            pivot: (100.0, 100.0),
        }
    }
}

/// Touch gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum travel along the dominant axis, in CSS pixels.
    pub threshold_px: f64,
}

impl SwipeConfig {
    /// Fifty pixels.
    #[must_use]
    pub const fn standard() -> Self {
        Self { threshold_px: 50.0 }
    }
}

/// Everything the notebook needs to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotebookConfig {
    /// Page-turn behavior.
    pub flip: FlipConfig,
    /// Growth counter behavior.
    pub growth: GrowthConfig,
    /// Clock refresh behavior.
    pub clock: ClockConfig,
    /// Swipe recognition.
    pub swipe: SwipeConfig,
    /// Page whose first activation starts the growth counter.
    pub graph_page: Option<usize>,
    /// Maximum level passed to the logger.
    pub log_level: LevelFilter,
}

impl NotebookConfig {
    /// Default configuration for the browser notebook.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            flip: FlipConfig::animated(),
            growth: GrowthConfig::standard(),
            clock: ClockConfig::standard(),
            swipe: SwipeConfig::standard(),
            graph_page: Some(4),
            log_level: LevelFilter::Info,
        }
    }
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self::web()
    }
}
