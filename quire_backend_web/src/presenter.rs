// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM page management.
//!
//! Translates [`Book`] state into classes and inline styles on the page's
//! existing `.page` elements, applying each [`BookUpdate`] as it arrives.
//!
//! [`Book`]: quire_core::book::Book
//! [`BookUpdate`]: quire_core::book::BookUpdate

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use quire_core::backend::Presenter;
use quire_core::book::{ActiveFlip, Book, BookUpdate, FLIPPING_Z, FlipStep, PageState};
use quire_core::config::FlipConfig;
use quire_core::flip::{FlipDirection, FlipPose};
use quire_core::transform::Transform3d;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Styles the turning pages need regardless of the page's own stylesheet.
const PAGE_3D_STYLE: &str = "
    .page {
        transform-style: preserve-3d;
        backface-visibility: hidden;
        will-change: transform, opacity;
    }
";

/// Maps a [`Book`] onto the `.page` elements of a document.
///
/// The presenter owns the page elements in document order plus the optional
/// arrow controls. Every update only touches what it needs: a turn frame
/// restyles one page, a layout restyles all of them.
///
/// [`Book`]: quire_core::book::Book
pub struct DomBook {
    pages: Vec<HtmlElement>,
    left_arrow: Option<Element>,
    right_arrow: Option<Element>,
    nav_hint: Option<Element>,
}

impl core::fmt::Debug for DomBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomBook")
            .field("pages_len", &self.pages.len())
            .field("left_arrow", &self.left_arrow.is_some())
            .field("right_arrow", &self.right_arrow.is_some())
            .field("nav_hint", &self.nav_hint.is_some())
            .finish()
    }
}

impl DomBook {
    /// Creates a presenter over explicit elements.
    #[must_use]
    pub fn new(
        pages: Vec<HtmlElement>,
        left_arrow: Option<Element>,
        right_arrow: Option<Element>,
        nav_hint: Option<Element>,
    ) -> Self {
        Self {
            pages,
            left_arrow,
            right_arrow,
            nav_hint,
        }
    }

    /// Collects `.page`, `.nav-arrow.left`, `.nav-arrow.right` and
    /// `.nav-hint` from `document`.
    ///
    /// Missing arrows are fine; an empty page list is left for the caller
    /// to judge.
    pub fn query(document: &Document) -> Result<Self, JsValue> {
        let list = document.query_selector_all(".page")?;
        let pages = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        let left_arrow = document.query_selector(".nav-arrow.left")?;
        let right_arrow = document.query_selector(".nav-arrow.right")?;
        let nav_hint = document.query_selector(".nav-hint")?;
        Ok(Self::new(pages, left_arrow, right_arrow, nav_hint))
    }

    /// Appends the 3D page style block to the document head.
    pub fn install_style(document: &Document) -> Result<(), JsValue> {
        let style = document.create_element("style")?;
        style.set_text_content(Some(PAGE_3D_STYLE));
        if let Some(head) = document.head() {
            head.append_child(&style)?;
        }
        Ok(())
    }

    /// Number of page elements found.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the page element at `idx`, if it exists.
    #[must_use]
    pub fn get_element(&self, idx: usize) -> Option<&HtmlElement> {
        self.pages.get(idx)
    }

    /// The left arrow control, if present.
    #[must_use]
    pub fn left_arrow(&self) -> Option<&Element> {
        self.left_arrow.as_ref()
    }

    /// The right arrow control, if present.
    #[must_use]
    pub fn right_arrow(&self) -> Option<&Element> {
        self.right_arrow.as_ref()
    }

    /// Hides the navigation hint after the first accepted turn.
    pub fn hide_nav_hint(&self) {
        if let Some(hint) = &self.nav_hint {
            let classes = hint.class_list();
            if !classes.contains("hidden") {
                let _ = classes.add_1("hidden");
            }
        }
    }

    fn layout(&self, book: &Book) {
        for state in book.page_states() {
            if let Some(el) = self.get_element(state.index) {
                apply_page_state(el, &state);
            }
        }
        if let Some(arrow) = &self.left_arrow {
            let _ = arrow
                .class_list()
                .toggle_with_force("disabled", book.at_first_page());
        }
        if let Some(arrow) = &self.right_arrow {
            let _ = arrow
                .class_list()
                .toggle_with_force("disabled", book.at_last_page());
        }
    }

    fn raise(&self, flip: &ActiveFlip, config: &FlipConfig) {
        let Some(el) = self.get_element(flip.page) else {
            return;
        };
        let s = el.style();
        let _ = s.set_property("z-index", &FLIPPING_Z.to_string());
        let _ = s.set_property("transform-origin", "left center");
        let _ = s.set_property("transition", "none");
        if flip.direction == FlipDirection::Backward {
            let _ = s.set_property("visibility", "visible");
            let _ = s.set_property("pointer-events", "auto");
        }
        apply_pose(el, &FlipPose::at(0.0, flip.direction, config));
    }
}

impl Presenter for DomBook {
    fn apply(&mut self, book: &Book, update: &BookUpdate) {
        match update {
            BookUpdate::Layout => self.layout(book),
            BookUpdate::FlipStarted(flip) => self.raise(flip, book.config()),
            BookUpdate::Flip(FlipStep::Frame { page, pose }) => {
                if let Some(el) = self.get_element(*page) {
                    apply_pose(el, pose);
                }
            }
            BookUpdate::Flip(FlipStep::Settled { page, direction }) => {
                if let Some(el) = self.get_element(*page) {
                    apply_pose(el, &FlipPose::settled(*direction));
                }
            }
        }
    }
}

/// Restyles a page for its resting role.
fn apply_page_state(el: &HtmlElement, state: &PageState) {
    let classes = el.class_list();
    for class in quire_core::book::PageRole::CLASSES {
        let _ = classes.remove_1(class);
    }
    let _ = classes.add_1(state.role.class_name());

    let style = &state.style;
    let s = el.style();
    let _ = s.set_property("transition", "none");
    let _ = s.set_property("z-index", &style.z_index.to_string());
    if let Some(transform) = &style.transform {
        let _ = s.set_property("transform", &css_matrix3d(transform));
    }
    if let Some(opacity) = style.opacity {
        let _ = s.set_property("opacity", &format!("{opacity}"));
    }
    let _ = s.set_property(
        "visibility",
        if style.visible { "visible" } else { "hidden" },
    );
    if let Some(interactive) = style.interactive {
        let _ = s.set_property("pointer-events", if interactive { "auto" } else { "none" });
    }
    if let Some(shadow) = &style.shadow {
        let _ = s.set_property("box-shadow", &shadow.to_string());
    }
}

/// Writes one turn pose into the page's inline style.
fn apply_pose(el: &HtmlElement, pose: &FlipPose) {
    let s = el.style();
    let _ = s.set_property("transform", &css_matrix3d(&pose.transform()));
    let _ = s.set_property("box-shadow", &pose.shadow.to_string());
    let _ = s.set_property("opacity", &format!("{}", pose.opacity));
}

/// Formats a transform as a CSS `matrix3d()` value.
pub(crate) fn css_matrix3d(xf: &Transform3d) -> String {
    let entries: Vec<String> = xf.to_cols_array().iter().map(ToString::to_string).collect();
    format!("matrix3d({})", entries.join(","))
}
