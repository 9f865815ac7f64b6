// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series layouts for Contour charts.
//!
//! This crate provides:
//! - a stack layout that annotates every point with its cumulative baseline (`y0`), and
//! - first-seen `x` domain discovery, which defines the grouping order on categorical axes.
//!
//! Layouts accept anything the `contour_core` normalizer accepts and write into the
//! normalized series in place; conformant input buffers come back as the output.

#![no_std]

extern crate alloc;

mod accumulator;
mod domain;
mod stack;

pub use accumulator::StackAccumulator;
pub use domain::ordered_x_domain;
pub use stack::{StackLayout, stack_layout};
