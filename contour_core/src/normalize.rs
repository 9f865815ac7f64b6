// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rewrites loosely-shaped input into canonical series.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::series::Series;
use crate::shape::{Shape, classify, classify_items};
use crate::{Datum, Point, SeriesInput, XValue};

/// Normalizes `data` into a canonical series collection.
///
/// `categories` supplies `x` values for raw (bare) values by position. Points that carry
/// their own `x` keep it; categories are only a fallback.
///
/// This is [`Normalizer::normalize`] with default options and borrowed categories.
pub fn normalize_series(
    data: impl Into<SeriesInput>,
    categories: Option<&[XValue]>,
) -> Vec<Series> {
    run(data.into(), categories, false)
}

/// Configurable normalizer.
///
/// ```
/// use contour_core::{Normalizer, XValue};
///
/// let series = Normalizer::new()
///     .with_categories(["d", "x", "a"])
///     .normalize(vec![5.0, 6.0, 7.0]);
/// assert_eq!(series[0].data[0].x, XValue::from("d"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    categories: Option<Vec<XValue>>,
    sort_points: bool,
}

impl Normalizer {
    /// Creates a normalizer without categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `categories` as `x` values for raw values, by position.
    ///
    /// Supplying categories (even an empty list) also disables sorting: the category order
    /// is the display order.
    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<XValue>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Sorts point-shaped data by `x` when no categories are set.
    ///
    /// Off by default: point and series inputs keep their order. When enabled, point arrays
    /// are sorted in place, so the caller's buffers are still reused.
    pub fn with_point_sort(mut self, enabled: bool) -> Self {
        self.sort_points = enabled;
        self
    }

    /// Returns the configured categories.
    pub fn categories(&self) -> Option<&[XValue]> {
        self.categories.as_deref()
    }

    /// Normalizes `data` into a canonical series collection.
    pub fn normalize(&self, data: impl Into<SeriesInput>) -> Vec<Series> {
        run(data.into(), self.categories(), self.sort_points)
    }
}

fn run(input: SeriesInput, categories: Option<&[XValue]>, sort_points: bool) -> Vec<Series> {
    let shape = classify(&input);
    tracing::trace!(?shape, len = input.len(), "classified series input");

    let ctx = Context {
        categories,
        sort_points: sort_points && categories.is_none(),
    };

    match input {
        SeriesInput::Series(mut series) => {
            if ctx.sort_points {
                for s in &mut series {
                    Series::sort_by_x(&mut s.data);
                }
            }
            series
        }
        SeriesInput::Points(mut points) => {
            if ctx.sort_points {
                Series::sort_by_x(&mut points);
            }
            vec![Series::unnamed(points)]
        }
        SeriesInput::Loose(items) => match shape {
            Shape::SeriesCollection | Shape::ArrayOfArrays => {
                items.into_iter().map(|d| ctx.series(d)).collect()
            }
            Shape::PointCollection => vec![Series::unnamed(ctx.points(items))],
            Shape::FlatArray => {
                if items
                    .iter()
                    .any(|d| !matches!(d, Datum::Number(_) | Datum::Missing))
                {
                    tracing::debug!(
                        len = items.len(),
                        "mixed sequence, normalizing as flat values"
                    );
                }
                vec![Series::unnamed(ctx.values(items))]
            }
        },
    }
}

struct Context<'a> {
    categories: Option<&'a [XValue]>,
    sort_points: bool,
}

impl Context<'_> {
    /// Converts one element of a series collection (or array of arrays).
    fn series(&self, datum: Datum) -> Series {
        match datum {
            Datum::Series { name, data } => Series {
                name,
                data: self.inner(data),
            },
            Datum::List(values) => Series::unnamed(self.values(values)),
            other => Series::unnamed(self.values(vec![other])),
        }
    }

    /// Converts the `data` of a series-shaped element. Never sorted by default.
    fn inner(&self, items: Vec<Datum>) -> Vec<Point> {
        if classify_items(&items) == Shape::PointCollection {
            return self.points(items);
        }
        items
            .into_iter()
            .enumerate()
            .map(|(i, d)| self.point(i, d))
            .collect()
    }

    /// Converts point-shaped elements, keeping their order unless point sorting is on.
    fn points(&self, items: Vec<Datum>) -> Vec<Point> {
        let mut points: Vec<Point> = items
            .into_iter()
            .enumerate()
            .map(|(i, d)| self.point(i, d))
            .collect();
        if self.sort_points {
            Series::sort_by_x(&mut points);
        }
        points
    }

    /// Converts raw values; sorted by `x` unless categories are set.
    fn values(&self, items: Vec<Datum>) -> Vec<Point> {
        let mut points: Vec<Point> = items
            .into_iter()
            .enumerate()
            .map(|(i, d)| self.point(i, d))
            .collect();
        if self.categories.is_none() {
            Series::sort_by_x(&mut points);
        }
        points
    }

    fn point(&self, index: usize, datum: Datum) -> Point {
        match datum {
            Datum::Point { x, y } => Point::new(x.unwrap_or_else(|| self.fallback_x(index)), y),
            Datum::Number(v) => Point::new(self.fallback_x(index), Some(v)),
            Datum::Missing | Datum::Series { .. } | Datum::List(_) => {
                Point::new(self.fallback_x(index), None)
            }
        }
    }

    fn fallback_x(&self, index: usize) -> XValue {
        self.categories
            .and_then(|c| c.get(index))
            .cloned()
            .unwrap_or_else(|| XValue::from_index(index))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use super::*;

    fn xs(series: &Series) -> Vec<XValue> {
        series.data.iter().map(|p| p.x.clone()).collect()
    }

    fn ys(series: &Series) -> Vec<Option<f64>> {
        series.data.iter().map(|p| p.y).collect()
    }

    fn labels(labels: &[&str]) -> Vec<XValue> {
        labels.iter().map(|&l| XValue::from(l)).collect()
    }

    #[test]
    fn flat_values_become_one_unnamed_sorted_series() {
        let series = normalize_series(vec![1.0, 2.0, 3.0, 4.0], None);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, None);
        assert!(series[0].is_sorted_by_x());
        assert_eq!(
            xs(&series[0]),
            [0, 1, 2, 3].map(XValue::from).to_vec(),
            "x defaults to the value index"
        );
    }

    #[test]
    fn null_and_undefined_values_become_missing_y() {
        let data = vec![Some(1.0), Some(2.0), None, None, Some(3.0)];
        let series = normalize_series(data, None);
        assert_eq!(
            ys(&series[0]),
            [Some(1.0), Some(2.0), None, None, Some(3.0)]
        );
    }

    #[test]
    fn zero_is_preserved() {
        let series = normalize_series(vec![0.0, -1.0], None);
        assert_eq!(ys(&series[0]), [Some(0.0), Some(-1.0)]);
    }

    #[test]
    fn categories_supply_x_and_keep_order() {
        let cats = labels(&["d", "x", "a"]);
        let series = normalize_series(vec![5.0, 6.0, 7.0], Some(cats.as_slice()));
        assert_eq!(xs(&series[0]), cats);
        assert_eq!(ys(&series[0]), [Some(5.0), Some(6.0), Some(7.0)]);
        assert!(!series[0].is_sorted_by_x(), "category order must be kept");
    }

    #[test]
    fn short_categories_fall_back_to_index() {
        let cats = labels(&["a"]);
        let series = normalize_series(vec![1.0, 2.0], Some(cats.as_slice()));
        assert_eq!(xs(&series[0]), [XValue::from("a"), XValue::from(1)]);
    }

    #[test]
    fn canonical_collection_is_returned_without_copy() {
        let data = vec![Series::named(
            "Series A",
            vec![
                Point::new(0, Some(1.0)),
                Point::new(1, Some(2.0)),
                Point::new(2, Some(3.0)),
            ],
        )];
        let outer = data.as_ptr();
        let inner = data[0].data.as_ptr();

        let series = normalize_series(data, None);
        assert_eq!(series.as_ptr(), outer, "collection buffer must be reused");
        assert_eq!(series[0].data.as_ptr(), inner, "point buffer must be reused");
    }

    #[test]
    fn canonical_points_are_wrapped_without_copy() {
        let data = vec![
            Point::new(0, Some(1.0)),
            Point::new(1, Some(2.0)),
            Point::new(2, Some(3.0)),
        ];
        let ptr = data.as_ptr();

        let series = normalize_series(data, None);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, None);
        assert_eq!(series[0].data.as_ptr(), ptr);
    }

    #[test]
    fn points_are_not_sorted_by_default() {
        let data = vec![
            Datum::point(3, Some(5.0)),
            Datum::point(1, Some(5.0)),
            Datum::point(2, Some(5.0)),
        ];
        let series = normalize_series(data, None);
        assert_eq!(xs(&series[0]), [3, 1, 2].map(XValue::from).to_vec());
    }

    #[test]
    fn point_sort_orders_points_in_place() {
        let data = vec![
            Point::new(3, Some(5.0)),
            Point::new(1, Some(6.0)),
            Point::new(2, Some(7.0)),
        ];
        let ptr = data.as_ptr();

        let series = Normalizer::new().with_point_sort(true).normalize(data);
        assert!(series[0].is_sorted_by_x());
        assert_eq!(ys(&series[0]), [Some(6.0), Some(7.0), Some(5.0)]);
        assert_eq!(series[0].data.as_ptr(), ptr, "sorting must not copy");
    }

    #[test]
    fn point_sort_is_disabled_by_categories() {
        let data = vec![Datum::point(3, Some(1.0)), Datum::point(1, Some(2.0))];
        let series = Normalizer::new()
            .with_point_sort(true)
            .with_categories(["a", "b"])
            .normalize(data);
        assert_eq!(xs(&series[0]), [3, 1].map(XValue::from).to_vec());
    }

    #[test]
    fn loose_points_become_one_series() {
        let data = vec![
            Datum::point("a", Some(1.0)),
            Datum::point("b", Some(2.0)),
            Datum::point("c", Some(3.0)),
        ];
        let series = normalize_series(data, None);
        assert_eq!(series.len(), 1);
        assert_eq!(xs(&series[0]), labels(&["a", "b", "c"]));
    }

    #[test]
    fn missing_y_fields_become_missing() {
        let data = vec![
            Datum::point("a", Some(1.0)),
            Datum::point("b", None),
            Datum::Point {
                x: Some("c".into()),
                y: None,
            },
        ];
        let series = normalize_series(data, None);
        assert_eq!(ys(&series[0]), [Some(1.0), None, None]);
    }

    #[test]
    fn explicit_x_wins_over_categories() {
        let data = vec![
            Datum::point("x", Some(1.0)),
            Datum::point("y", Some(2.0)),
            Datum::point("z", Some(3.0)),
        ];
        let cats = labels(&["a", "b", "c"]);
        let series = normalize_series(data, Some(cats.as_slice()));
        assert_eq!(xs(&series[0]), labels(&["x", "y", "z"]));
        assert_eq!(ys(&series[0]), [Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn y_only_points_take_x_from_categories() {
        let data = vec![
            Datum::Point { x: None, y: Some(1.0) },
            Datum::Point { x: None, y: Some(2.0) },
        ];
        let cats = labels(&["a", "b"]);
        let series = normalize_series(data.clone(), Some(cats.as_slice()));
        assert_eq!(xs(&series[0]), cats);

        let series = normalize_series(data, None);
        assert_eq!(xs(&series[0]), [0, 1].map(XValue::from).to_vec());
    }

    #[test]
    fn loose_series_keep_names_and_normalize_inner_data() {
        let values = || [1.0, 2.0, 3.0, 4.0].map(Datum::Number).to_vec();
        let data = vec![
            Datum::series("s1", values()),
            Datum::series("s2", values()),
            Datum::series("s3", values()),
        ];
        let series = normalize_series(data, None);
        let names: Vec<_> = series.iter().map(|s| s.name.clone()).collect();
        assert_eq!(
            names,
            ["s1", "s2", "s3"].map(|n| Some(String::from(n))).to_vec()
        );
        for s in &series {
            assert_eq!(s.data.len(), 4);
            assert_eq!(s.data[3].x, XValue::from(3));
        }
    }

    #[test]
    fn loose_series_with_point_data_keep_point_order() {
        let data = vec![Datum::series(
            "s",
            vec![Datum::point(2, Some(1.0)), Datum::point(1, Some(2.0))],
        )];
        let series = normalize_series(data, None);
        assert_eq!(xs(&series[0]), [2, 1].map(XValue::from).to_vec());
    }

    #[test]
    fn array_of_arrays_becomes_one_series_per_list() {
        let data = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, 4.0],
        ];
        let series = normalize_series(data, None);
        assert_eq!(series.len(), 3);
        for s in &series {
            assert_eq!(s.name, None);
            assert_eq!(ys(s), [Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        }
    }

    #[test]
    fn mixed_input_is_coerced_not_rejected() {
        let data = vec![
            Datum::Number(1.0),
            Datum::point("p", Some(2.0)),
            Datum::List(vec![Datum::Number(9.0)]),
            Datum::Missing,
        ];
        let series = normalize_series(data, None);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].data.len(), 4);
        let p = series[0]
            .data
            .iter()
            .find(|p| p.x == XValue::from("p"))
            .unwrap();
        assert_eq!(p.y, Some(2.0));
    }

    #[test]
    fn empty_input_is_an_empty_collection() {
        assert!(normalize_series(Vec::<Datum>::new(), None).is_empty());
        assert!(normalize_series(SeriesInput::default(), None).is_empty());
    }
}
