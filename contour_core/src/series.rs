// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical points and series.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::XValue;

/// A canonical data point.
///
/// `y` is `None` for missing values; missing values are kept in place, never dropped.
/// `y0` is the stacking baseline and stays `None` until a stack layout fills it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Point {
    /// Horizontal position.
    pub x: XValue,
    /// Value, or `None` when missing.
    pub y: Option<f64>,
    /// Stack baseline (sum of the `y`s stacked below this point).
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub y0: Option<f64>,
}

impl Point {
    /// Creates an unstacked point.
    pub fn new(x: impl Into<XValue>, y: Option<f64>) -> Self {
        Self {
            x: x.into(),
            y,
            y0: None,
        }
    }

    /// Top of this point's stacked segment (`y0 + y`).
    ///
    /// Returns `None` until the point has been stacked. A missing `y` adds nothing.
    pub fn y1(&self) -> Option<f64> {
        self.y0.map(|y0| y0 + self.y.unwrap_or(0.0))
    }
}

/// A named, ordered sequence of points.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Series {
    /// Display name; `None` for series synthesized from bare values.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// Points in display order.
    pub data: Vec<Point>,
}

impl Series {
    /// Creates a named series.
    pub fn named(name: impl Into<String>, data: Vec<Point>) -> Self {
        Self {
            name: Some(name.into()),
            data,
        }
    }

    /// Creates an unnamed series.
    pub fn unnamed(data: Vec<Point>) -> Self {
        Self { name: None, data }
    }

    /// Returns `true` if points are in non-decreasing `x` order.
    pub fn is_sorted_by_x(&self) -> bool {
        self.data
            .windows(2)
            .all(|w| w[0].x.total_cmp(&w[1].x).is_le())
    }

    /// Stable in-place sort of the points by `x`.
    pub(crate) fn sort_by_x(points: &mut [Point]) {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
    }
}
