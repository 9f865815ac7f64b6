// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick thinning for dense (typically categorical) domains.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Returns at most `max_ticks` evenly spaced entries of `domain`.
///
/// If the domain already fits, it is returned as is (borrowed, not copied). Otherwise entries
/// are sampled from `domain[0]` every `domain.len() / max_ticks` positions (rounded down),
/// and exactly `max_ticks` of them are kept.
///
/// ```
/// use contour_charts::max_tick_values;
///
/// let domain: Vec<u32> = (1..=10).collect();
/// assert_eq!(*max_tick_values(5, &domain), [1, 3, 5, 7, 9]);
/// ```
pub fn max_tick_values<T: Clone>(max_ticks: usize, domain: &[T]) -> Cow<'_, [T]> {
    if domain.len() <= max_ticks {
        return Cow::Borrowed(domain);
    }
    if max_ticks == 0 {
        return Cow::Owned(Vec::new());
    }
    let step = domain.len() / max_ticks;
    Cow::Owned(domain.iter().step_by(step).take(max_ticks).cloned().collect())
}
