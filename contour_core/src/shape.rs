// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input shape classification.

use crate::{Datum, SeriesInput};

/// The shape an input was recognized as.
///
/// Classification runs before any conversion. Rules are tried in declaration order and the
/// first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Every element exposes `name` and `data`.
    ///
    /// An empty sequence matches this rule vacuously.
    SeriesCollection,
    /// Every element exposes an `x` and/or `y` key.
    PointCollection,
    /// Every element is itself a sequence of raw values.
    ArrayOfArrays,
    /// Anything else: treated as a flat list of raw values.
    FlatArray,
}

/// Classifies a top-level input.
pub fn classify(input: &SeriesInput) -> Shape {
    match input {
        SeriesInput::Series(_) => Shape::SeriesCollection,
        SeriesInput::Points(_) => Shape::PointCollection,
        SeriesInput::Loose(items) => classify_items(items),
    }
}

/// Classifies a loose sequence by the keys its elements expose.
pub fn classify_items(items: &[Datum]) -> Shape {
    if items.iter().all(|d| matches!(d, Datum::Series { .. })) {
        Shape::SeriesCollection
    } else if items.iter().all(|d| matches!(d, Datum::Point { .. })) {
        Shape::PointCollection
    } else if items.iter().all(|d| matches!(d, Datum::List(_))) {
        Shape::ArrayOfArrays
    } else {
        Shape::FlatArray
    }
}
