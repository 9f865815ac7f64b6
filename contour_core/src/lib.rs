// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical series model and shape-normalizing ingestion for Contour charts.
//!
//! Chart data arrives in many loose shapes:
//! - a flat list of values (`[1, 2, null, 4]`),
//! - a list of points (`[{x: 'a', y: 1}, ...]`),
//! - a list of value lists (`[[1, 2], [3, 4]]`), or
//! - a list of named series (`[{name: 's1', data: [...]}, ...]`).
//!
//! This crate classifies those shapes ([`Shape`]) and rewrites them into one canonical
//! representation: a `Vec<`[`Series`]`>`, each series holding ordered [`Point`]s.
//!
//! Input that is already canonical is never copied: the caller's buffers are moved through
//! the [`Normalizer`] and come back as the output.
//!
//! Nothing here validates input. Anything that doesn't match a known shape is coerced on a
//! best-effort basis.

#![no_std]

extern crate alloc;

mod datum;
#[cfg(feature = "json")]
mod json;
mod normalize;
mod series;
mod shape;
mod x_value;

pub use datum::{Datum, SeriesInput};
pub use normalize::{Normalizer, normalize_series};
pub use series::{Point, Series};
pub use shape::{Shape, classify, classify_items};
pub use x_value::XValue;
