// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First-seen `x` domain discovery.

extern crate alloc;

use alloc::vec::Vec;

use contour_core::{Series, XValue};
use hashbrown::HashSet;

/// Returns the distinct `x` values of `series`, in first-seen order.
///
/// Series are scanned in order, then points within each series. This is not a sort: on a
/// categorical axis the first appearance of a label defines its position.
pub fn ordered_x_domain(series: &[Series]) -> Vec<XValue> {
    let mut seen: HashSet<&XValue> = HashSet::new();
    let mut out = Vec::new();
    for p in series.iter().flat_map(|s| s.data.iter()) {
        if seen.insert(&p.x) {
            out.push(p.x.clone());
        }
    }
    out
}
