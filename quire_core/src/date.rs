// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date label for the first page.

use alloc::string::{String, ToString};

use chrono::NaiveDate;

/// Formats `date` in US short style, e.g. `Oct 19, 2026`.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
