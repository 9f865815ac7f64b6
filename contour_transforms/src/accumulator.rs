// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered running totals keyed by `x`.

extern crate alloc;

use alloc::vec::Vec;

use contour_core::XValue;
use hashbrown::HashMap;

/// Running stack totals, one per distinct `x`, in first-seen order.
///
/// Stacking order is observable, so iteration follows insertion order rather than hash
/// order: keys live in a `Vec` and the map only indexes into it.
#[derive(Clone, Debug, Default)]
pub struct StackAccumulator {
    index: HashMap<XValue, usize>,
    totals: Vec<(XValue, f64)>,
}

impl StackAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator with a zero total for each `x` in `domain`.
    ///
    /// Duplicate keys keep their first position.
    pub fn from_domain(domain: impl IntoIterator<Item = XValue>) -> Self {
        let mut acc = Self::new();
        for x in domain {
            acc.slot(&x);
        }
        acc
    }

    /// Number of distinct `x` groups.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns `true` if no group has been seen.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Current total for `x` (`0.0` for unseen keys).
    pub fn total(&self, x: &XValue) -> f64 {
        self.index.get(x).map_or(0.0, |&i| self.totals[i].1)
    }

    /// Adds `y` to the total for `x`, returning the total before the addition.
    ///
    /// The returned value is the baseline (`y0`) of the segment being stacked.
    pub fn push(&mut self, x: &XValue, y: f64) -> f64 {
        let i = self.slot(x);
        let base = self.totals[i].1;
        self.totals[i].1 = base + y;
        base
    }

    /// Groups and their totals, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&XValue, f64)> + '_ {
        self.totals.iter().map(|(x, t)| (x, *t))
    }

    fn slot(&mut self, x: &XValue) -> usize {
        if let Some(&i) = self.index.get(x) {
            return i;
        }
        let i = self.totals.len();
        self.index.insert(x.clone(), i);
        self.totals.push((x.clone(), 0.0));
        i
    }
}
