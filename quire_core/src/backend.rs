// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! A backend supplies three pieces:
//!
//! - **Frame source**: produces [`FrameTick`] values from a platform
//!   mechanism (`requestAnimationFrame` on the web). Setup and lifecycle are
//!   platform-specific, so this is not a trait.
//!
//! - **Time**: a `now() -> HostTime` free function reading the platform's
//!   monotonic clock in microseconds.
//!
//! - **Presenter**: implements [`Presenter`] to reflect [`Book`] changes in
//!   a platform-native tree (DOM elements on the web).
//!
//! `quire_core` owns the model and this contract. Backend crates depend on
//! it and provide platform glue; the application wires both together.
//!
//! [`FrameTick`]: crate::time::FrameTick
//! [`Book`]: crate::book::Book

use crate::book::{Book, BookUpdate};

/// Applies book updates to a platform-native presentation tree.
///
/// The DOM presenter and test doubles implement this trait.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_input(intent: NavIntent) {
///     // Moves the cursor and applies `FlipStarted` or `Layout`.
///     let _ = book.turn(intent, now(), &mut presenter);
/// }
///
/// fn on_frame(tick: FrameTick) {
///     // Applies one `Flip` frame; after the settle, a full `Layout`.
///     book.step(tick.now, &mut presenter);
/// }
/// ```
pub trait Presenter {
    /// Applies `update`, reading current cursor and page state from `book`.
    fn apply(&mut self, book: &Book, update: &BookUpdate);
}
