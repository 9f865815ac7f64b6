// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loose input values accepted by the normalizer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Point, Series, XValue};

/// One element of a loosely-shaped input sequence.
///
/// This models duck-typed chart data explicitly: an element is recognized by the keys it
/// exposes, not by a declared type.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    /// `null`, `undefined`, or anything with no usable value.
    Missing,
    /// A bare numeric value.
    Number(f64),
    /// An object exposing at least one axis key (`x` only, `y` only, or both).
    Point {
        /// Explicit `x`, if the object has one.
        x: Option<XValue>,
        /// `y`, or `None` when missing/null.
        y: Option<f64>,
    },
    /// An object exposing both `name` and `data`.
    Series {
        /// Series name (may be present but null).
        name: Option<String>,
        /// Inner data, itself loosely shaped.
        data: Vec<Datum>,
    },
    /// A nested sequence.
    List(Vec<Datum>),
}

impl Datum {
    /// Creates a point-shaped datum with both axis keys.
    pub fn point(x: impl Into<XValue>, y: Option<f64>) -> Self {
        Self::Point {
            x: Some(x.into()),
            y,
        }
    }

    /// Creates a series-shaped datum.
    pub fn series(name: impl Into<String>, data: Vec<Self>) -> Self {
        Self::Series {
            name: Some(name.into()),
            data,
        }
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for Datum {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

impl From<Point> for Datum {
    fn from(point: Point) -> Self {
        Self::Point {
            x: Some(point.x),
            y: point.y,
        }
    }
}

impl From<Vec<Self>> for Datum {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

/// The top-level argument of the normalizer.
///
/// The typed variants carry data that is already canonical; they are moved through the
/// normalizer without copying. Everything else is [`SeriesInput::Loose`] and gets classified
/// element by element.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesInput {
    /// An already canonical series collection.
    Series(Vec<Series>),
    /// An already canonical point array (one series worth of data).
    Points(Vec<Point>),
    /// A loosely-shaped sequence.
    Loose(Vec<Datum>),
}

impl SeriesInput {
    /// Number of top-level elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Series(s) => s.len(),
            Self::Points(p) => p.len(),
            Self::Loose(d) => d.len(),
        }
    }

    /// Returns `true` if there are no top-level elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SeriesInput {
    fn default() -> Self {
        Self::Loose(Vec::new())
    }
}

impl From<Vec<Series>> for SeriesInput {
    fn from(series: Vec<Series>) -> Self {
        Self::Series(series)
    }
}

impl From<Vec<Point>> for SeriesInput {
    fn from(points: Vec<Point>) -> Self {
        Self::Points(points)
    }
}

impl From<Vec<Datum>> for SeriesInput {
    fn from(items: Vec<Datum>) -> Self {
        Self::Loose(items)
    }
}

impl From<Vec<f64>> for SeriesInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Loose(values.into_iter().map(Datum::Number).collect())
    }
}

impl From<Vec<Option<f64>>> for SeriesInput {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::Loose(values.into_iter().map(Datum::from).collect())
    }
}

impl From<Vec<Vec<f64>>> for SeriesInput {
    fn from(lists: Vec<Vec<f64>>) -> Self {
        Self::Loose(
            lists
                .into_iter()
                .map(|l| Datum::List(l.into_iter().map(Datum::Number).collect()))
                .collect(),
        )
    }
}

impl From<Vec<Vec<Option<f64>>>> for SeriesInput {
    fn from(lists: Vec<Vec<Option<f64>>>) -> Self {
        Self::Loose(
            lists
                .into_iter()
                .map(|l| Datum::List(l.into_iter().map(Datum::from).collect()))
                .collect(),
        )
    }
}
