// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small chart helpers used alongside the Contour series pipeline.
//!
//! - [`max_tick_values`] thins a tick domain down to at most `n` evenly spaced entries.
//! - [`round_to_nearest`] snaps a value to a multiple of a step.
//! - [`date_diff`] counts whole days between two timestamps.

#![no_std]

extern crate alloc;

mod date;
#[cfg(not(feature = "std"))]
mod float;
mod round;
mod ticks;

pub use date::{MILLIS_PER_DAY, date_diff, date_diff_millis};
pub use round::round_to_nearest;
pub use ticks::max_tick_values;
