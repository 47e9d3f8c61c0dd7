// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Views for the notebook's auxiliary widgets.
//!
//! Each view looks its elements up once and does nothing when they are
//! missing, so a page may carry any subset of the widgets.

use alloc::string::ToString as _;

use quire_core::clock::HandAngles;
use quire_core::growth::GrowthSample;
use web_sys::{Document, Element};

/// The analog clock's two SVG hands.
#[derive(Debug)]
pub struct ClockFace {
    hour_hand: Option<Element>,
    minute_hand: Option<Element>,
    pivot: (f64, f64),
}

impl ClockFace {
    /// Finds `#hour-hand` and `#minute-hand`, rotating them around `pivot`.
    #[must_use]
    pub fn query(document: &Document, pivot: (f64, f64)) -> Self {
        Self {
            hour_hand: document.get_element_by_id("hour-hand"),
            minute_hand: document.get_element_by_id("minute-hand"),
            pivot,
        }
    }

    /// Returns `true` if at least one hand exists.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.hour_hand.is_some() || self.minute_hand.is_some()
    }

    /// Points both hands at `angles`.
    pub fn show(&self, angles: &HandAngles) {
        if let Some(hand) = &self.hour_hand {
            let _ = hand.set_attribute(
                "transform",
                &HandAngles::svg_transform(angles.hour_deg, self.pivot),
            );
        }
        if let Some(hand) = &self.minute_hand {
            let _ = hand.set_attribute(
                "transform",
                &HandAngles::svg_transform(angles.minute_deg, self.pivot),
            );
        }
    }
}

struct GraphParts {
    curve: Element,
    arrow: Element,
    note: Element,
    counter: Element,
}

impl GraphParts {
    fn query(document: &Document) -> Option<Self> {
        Some(Self {
            curve: document.get_element_by_id("growth-curve")?,
            arrow: document.get_element_by_id("curve-arrow")?,
            note: document.query_selector(".graph-note").ok().flatten()?,
            counter: document.get_element_by_id("growth-counter")?,
        })
    }
}

/// The growth graph: curve, arrow head, caption and counter readout.
///
/// The graph only works as a whole; if any part is missing the view is
/// inert and [`is_present`](Self::is_present) is `false`.
pub struct GrowthGraph {
    parts: Option<GraphParts>,
}

impl core::fmt::Debug for GrowthGraph {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrowthGraph")
            .field("present", &self.parts.is_some())
            .finish()
    }
}

impl GrowthGraph {
    /// Finds `#growth-curve`, `#curve-arrow`, `.graph-note` and
    /// `#growth-counter`.
    #[must_use]
    pub fn query(document: &Document) -> Self {
        Self {
            parts: GraphParts::query(document),
        }
    }

    /// Returns `true` when every part of the graph exists.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.parts.is_some()
    }

    /// Returns the graph to its hidden start state.
    pub fn reset(&self) {
        let Some(parts) = &self.parts else {
            return;
        };
        let _ = parts.curve.class_list().remove_1("animate");
        let _ = parts.arrow.class_list().remove_1("show");
        let _ = parts.note.class_list().remove_1("show");
        let _ = parts.counter.class_list().remove_1("show");
    }

    /// Starts the curve animation and fades the labels in.
    pub fn reveal(&self) {
        let Some(parts) = &self.parts else {
            return;
        };
        let _ = parts.curve.class_list().add_1("animate");
        let _ = parts.arrow.class_list().add_1("show");
        let _ = parts.note.class_list().add_1("show");
        let _ = parts.counter.class_list().add_1("show");
    }

    /// Writes one counter frame, revealing the graph first if asked to.
    pub fn show(&self, sample: &GrowthSample) {
        let Some(parts) = &self.parts else {
            return;
        };
        if sample.reveal {
            self.reveal();
        }
        parts.counter.set_text_content(Some(&sample.to_string()));
    }
}

/// The `#current-date` label.
#[derive(Debug)]
pub struct DateStamp {
    el: Option<Element>,
}

impl DateStamp {
    /// Finds `#current-date`.
    #[must_use]
    pub fn query(document: &Document) -> Self {
        Self {
            el: document.get_element_by_id("current-date"),
        }
    }

    /// Replaces the label text.
    pub fn set(&self, label: &str) {
        if let Some(el) = &self.el {
            el.set_text_content(Some(label));
        }
    }
}
