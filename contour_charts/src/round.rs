// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping values to multiples of a step.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Rounds `value` to the nearest multiple of `step`.
///
/// Halfway values round up (towards positive infinity), so `round_to_nearest(7.0, 14.0)` is
/// `14.0` and `round_to_nearest(-7.0, 14.0)` is `0.0`.
///
/// `step` must be positive and finite; any other step returns `value` unchanged.
pub fn round_to_nearest(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }
    (value / step + 0.5).floor() * step
}
