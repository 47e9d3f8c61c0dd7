// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core model for a paginated notebook with animated page turns.
//!
//! `quire_core` holds everything that does not touch the browser: the page
//! cursor, the per-frame turn pose, input interpretation and the small
//! widgets that decorate the notebook. It is `no_std` compatible (with
//! `alloc`) and runs its tests on the host.
//!
//! # Architecture
//!
//! Input and display refreshes drive the same single-threaded model:
//!
//! ```text
//!   click / key / swipe ──► NavIntent ──► Book::turn() ──► Presenter::apply(FlipStarted | Layout)
//!
//!   FrameTick ──► Book::step() ──► Presenter::apply(Flip(Frame)) … Flip(Settled), Layout
//!            └──► GrowthCounter::sample() ──► counter label
//! ```
//!
//! **[`notebook`]**: Ties the two together and arms the growth counter when a
//! layout comes to rest on the graph page.
//!
//! **[`book`]**: Page cursor with a single busy flag; refuses navigation
//! while a turn animates and derives each page's resting style.
//!
//! **[`flip`]**: Closed-form turn pose (rotation, curl, bend, lift, skew,
//! shadow) as a function of eased progress.
//!
//! **[`transform`]**: 4×4 transform using CSS matrix conventions.
//!
//! **[`easing`]**: Time-to-progress curves.
//!
//! **[`input`]**: Keys, swipes and screen-half clicks to [`NavIntent`](input::NavIntent).
//!
//! **[`clock`]**, **[`growth`]**, **[`date`]**: Analog clock hands, the
//! one-shot growth counter, and the date label.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that platform
//! backends implement.
//!
//! **[`config`]**, **[`time`]**: Tunables and microsecond host time.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies and
//!   uses `std` float functions instead of `libm`.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod backend;
pub mod book;
pub mod clock;
pub mod config;
pub mod date;
pub mod easing;
pub mod flip;
pub mod growth;
pub mod input;
pub mod notebook;
pub mod time;
pub mod transform;
