// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for quire.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` frame source that runs only while
//!   something animates
//! - [`IntervalTimer`]: `setInterval` wrapper for the clock
//! - [`DomBook`]: `.page` element management
//! - [`ClockFace`], [`GrowthGraph`], [`DateStamp`]: widget views
//! - [`ConsoleLogger`]: `log` output to the browser console

#![no_std]

extern crate alloc;

mod interval;
mod logger;
mod presenter;
mod raf;
mod widgets;

pub use interval::IntervalTimer;
pub use logger::{ConsoleLogger, init_logger};
pub use presenter::DomBook;
pub use quire_core::backend::Presenter;
pub use raf::RafLoop;
pub use widgets::{ClockFace, DateStamp, GrowthGraph};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use quire_core::time::HostTime;

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microseconds, on the same clock as the
/// timestamps [`RafLoop`] hands out.
#[must_use]
pub fn now() -> HostTime {
    host_time_from_millis(raf::performance_now())
}

/// Converts a `DOMHighResTimeStamp` in milliseconds to [`HostTime`].
///
/// Negative and NaN inputs map to zero.
#[must_use]
pub fn host_time_from_millis(ms: f64) -> HostTime {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

/// Reads local wall-clock time from a JS `Date`.
///
/// Returns `None` if the browser reports an impossible date.
#[must_use]
pub fn wall_clock() -> Option<NaiveDateTime> {
    let d = js_sys::Date::new_0();
    let year = i32::try_from(d.get_full_year()).ok()?;
    let date = NaiveDate::from_ymd_opt(year, d.get_month() + 1, d.get_date())?;
    let time = NaiveTime::from_hms_opt(d.get_hours(), d.get_minutes(), d.get_seconds())?;
    Some(date.and_time(time))
}
