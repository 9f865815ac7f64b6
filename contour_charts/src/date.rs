// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-day differences between timestamps.

use chrono::NaiveDateTime;

/// Milliseconds in one (UTC, leap-second free) day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days from `b` to `a`: `floor((a - b) / 1 day)`.
///
/// The sign follows `a - b`, and partial days round down, so a difference of minus one hour
/// is `-1`.
pub fn date_diff(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (a - b).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// [`date_diff`] on epoch-millisecond timestamps.
pub fn date_diff_millis(a: i64, b: i64) -> i64 {
    a.saturating_sub(b).div_euclid(MILLIS_PER_DAY)
}
