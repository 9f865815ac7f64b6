// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zero-baseline stack layout.

extern crate alloc;

use alloc::vec::Vec;

use contour_core::{Normalizer, Series, SeriesInput};

use crate::{StackAccumulator, ordered_x_domain};

/// Returns the default stack layout as a plain function.
///
/// The returned callable holds no state: each call normalizes its argument, stacks it, and
/// hands the same series back with `y0` filled in.
///
/// ```
/// use contour_core::{Point, Series};
/// use contour_transforms::stack_layout;
///
/// let data = vec![
///     Series::named("a", vec![Point::new(0, Some(1.0))]),
///     Series::named("b", vec![Point::new(0, Some(4.0))]),
/// ];
/// let stacked = stack_layout()(data.into());
/// assert_eq!(stacked[1].data[0].y0, Some(1.0));
/// ```
pub fn stack_layout() -> impl Fn(SeriesInput) -> Vec<Series> + Copy + Send + Sync {
    |data| StackLayout::new().apply(data)
}

/// Stacks parallel series that share `x` values.
///
/// Each point's `y0` is the sum of the `y`s of all earlier series' points with the same `x`
/// (missing values add nothing). Groups are formed by `x` equality, in first-seen order, so
/// labels stack per appearance rather than alphabetically and numeric `x`s are never binned.
#[derive(Clone, Debug, Default)]
pub struct StackLayout {
    normalizer: Normalizer,
}

impl StackLayout {
    /// Creates a stack layout using a default [`Normalizer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the normalizer applied to input before stacking.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Returns the normalizer applied before stacking.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalizes `data` and stacks the result.
    pub fn apply(&self, data: impl Into<SeriesInput>) -> Vec<Series> {
        let mut series = self.normalizer.normalize(data);
        self.stack_in_place(&mut series);
        series
    }

    /// Writes `y0` into every point of already canonical `series`.
    ///
    /// Only `y0` is touched; `x`, `y` and names are left as they are.
    pub fn stack_in_place(&self, series: &mut [Series]) {
        let mut acc = StackAccumulator::from_domain(ordered_x_domain(series));
        tracing::trace!(
            series = series.len(),
            groups = acc.len(),
            "stacking series"
        );
        for s in series.iter_mut() {
            for p in &mut s.data {
                p.y0 = Some(acc.push(&p.x, p.y.unwrap_or(0.0)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use contour_core::{Datum, Point, XValue};

    use super::*;

    fn y0s(series: &Series) -> Vec<Option<f64>> {
        series.data.iter().map(|p| p.y0).collect()
    }

    #[test]
    fn parallel_series_stack_by_x() {
        let data = vec![
            Series::named("a", vec![Point::new(0, Some(1.0)), Point::new(1, Some(2.0))]),
            Series::named("b", vec![Point::new(0, Some(4.0)), Point::new(1, Some(5.0))]),
        ];
        let out = stack_layout()(data.into());
        assert_eq!(y0s(&out[0]), [Some(0.0), Some(0.0)]);
        assert_eq!(y0s(&out[1]), [Some(1.0), Some(2.0)]);
    }

    #[test]
    fn stacking_reuses_the_input_buffers() {
        let data = vec![
            Series::named("a", vec![Point::new(0, Some(1.0))]),
            Series::named("b", vec![Point::new(0, Some(2.0))]),
        ];
        let outer = data.as_ptr();
        let inner = data[1].data.as_ptr();

        let out = StackLayout::new().apply(data);
        assert_eq!(out.as_ptr(), outer);
        assert_eq!(out[1].data.as_ptr(), inner);
        assert_eq!(out[1].data[0].y, Some(2.0), "y must not change");
        assert_eq!(out[1].data[0].y0, Some(1.0));
    }

    #[test]
    fn missing_values_add_nothing() {
        let data = vec![
            Series::unnamed(vec![Point::new(0, None)]),
            Series::unnamed(vec![Point::new(0, Some(3.0))]),
            Series::unnamed(vec![Point::new(0, Some(1.0))]),
        ];
        let out = StackLayout::new().apply(data);
        assert_eq!(y0s(&out[0]), [Some(0.0)]);
        assert_eq!(y0s(&out[1]), [Some(0.0)]);
        assert_eq!(y0s(&out[2]), [Some(3.0)]);
        assert_eq!(out[2].data[0].y1(), Some(4.0));
    }

    #[test]
    fn disjoint_x_sets_start_at_zero() {
        let data = vec![
            Series::unnamed(vec![Point::new(0, Some(1.0)), Point::new(1, Some(1.0))]),
            Series::unnamed(vec![Point::new(2, Some(5.0)), Point::new(3, Some(5.0))]),
        ];
        let out = StackLayout::new().apply(data);
        assert_eq!(y0s(&out[1]), [Some(0.0), Some(0.0)]);
    }

    #[test]
    fn numeric_x_is_grouped_by_equality_not_proximity() {
        let data = vec![
            Series::unnamed(vec![Point::new(1.0, Some(1.0))]),
            Series::unnamed(vec![Point::new(1.000_001, Some(1.0))]),
            Series::unnamed(vec![Point::new(1.0, Some(1.0))]),
        ];
        let out = StackLayout::new().apply(data);
        assert_eq!(y0s(&out[1]), [Some(0.0)]);
        assert_eq!(y0s(&out[2]), [Some(1.0)]);
    }

    #[test]
    fn loose_input_is_normalized_before_stacking() {
        let data = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let out = StackLayout::new().apply(data);
        assert_eq!(out.len(), 2);
        assert_eq!(y0s(&out[1]), [Some(1.0), Some(2.0)]);
    }

    #[test]
    fn categories_flow_through_the_normalizer() {
        let layout =
            StackLayout::new().with_normalizer(Normalizer::new().with_categories(["q1", "q2"]));
        let out = layout.apply(vec![
            Datum::List(vec![Datum::Number(2.0), Datum::Number(3.0)]),
            Datum::List(vec![Datum::Number(1.0), Datum::Missing]),
        ]);
        assert_eq!(out[1].data[0].x, XValue::from("q1"));
        assert_eq!(y0s(&out[1]), [Some(2.0), Some(3.0)]);
    }

    #[test]
    fn empty_input_stacks_to_empty_output() {
        let out = stack_layout()(SeriesInput::default());
        assert!(out.is_empty());
    }

    #[test]
    fn layout_function_is_reusable() {
        let stack = stack_layout();
        for _ in 0..2 {
            let out = stack(vec![vec![1.0], vec![1.0]].into());
            assert_eq!(y0s(&out[1]), [Some(1.0)]);
        }
    }
}
