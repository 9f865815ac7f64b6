// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal (domain) values: numbers or ordinal labels.

extern crate alloc;

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A point's `x` value.
///
/// Equality and hashing are by value, so an `XValue` can key a grouping map:
/// - numbers compare by bit pattern after folding `-0.0` into `0.0` (all `NaN`s are equal),
/// - labels compare by string content.
///
/// Numbers and labels are never equal to each other: `1.0` and `"1"` are distinct categories.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum XValue {
    /// A numeric position (an index, a timestamp, a measurement).
    Number(f64),
    /// An ordinal label on a categorical axis.
    Label(String),
}

impl XValue {
    /// The default `x` for the `index`-th raw value.
    pub fn from_index(index: usize) -> Self {
        Self::Number(index as f64)
    }

    /// Returns the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Label(_) => None,
        }
    }

    /// Returns the label, if this is a label.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Label(s) => Some(s),
        }
    }

    /// Returns `true` for labels.
    pub fn is_label(&self) -> bool {
        matches!(self, Self::Label(_))
    }

    /// A total order used for sorting points by `x`.
    ///
    /// Numbers sort ascending (`f64::total_cmp`) and come before all labels; labels sort
    /// lexicographically.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => canonical(*a).total_cmp(&canonical(*b)),
            (Self::Number(_), Self::Label(_)) => Ordering::Less,
            (Self::Label(_), Self::Number(_)) => Ordering::Greater,
            (Self::Label(a), Self::Label(b)) => a.cmp(b),
        }
    }
}

/// Folds `-0.0` into `0.0` and every `NaN` into one bit pattern.
fn canonical(v: f64) -> f64 {
    if v.is_nan() {
        f64::NAN
    } else if v == 0.0 {
        0.0
    } else {
        v
    }
}

impl PartialEq for XValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => canonical(*a).to_bits() == canonical(*b).to_bits(),
            (Self::Label(a), Self::Label(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for XValue {}

impl Hash for XValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(v) => {
                state.write_u8(0);
                canonical(*v).to_bits().hash(state);
            }
            Self::Label(s) => {
                state.write_u8(1);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for XValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for XValue {
    fn from(value: &str) -> Self {
        Self::Label(value.into())
    }
}

impl From<String> for XValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}
