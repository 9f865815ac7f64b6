// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs the Contour series pipeline over JSON samples.
//!
//! With no arguments, a built-in set of samples is used. Otherwise each argument is read as a
//! JSON file. Set `CONTOUR_LOG` (e.g. `trace`) to see classification and stacking events.

use std::error::Error;
use std::{env, fs};

use chrono::NaiveDateTime;
use contour_charts::{date_diff, max_tick_values, round_to_nearest};
use contour_core::{SeriesInput, classify};
use contour_transforms::{StackLayout, ordered_x_domain};
use tracing::Level;

const SAMPLES: &[(&str, &str)] = &[
    ("flat values", "[1, 2, null, 4, 0]"),
    (
        "points",
        r#"[{"x": 3, "y": 5}, {"x": 1, "y": 5}, {"x": 2}]"#,
    ),
    ("array of arrays", "[[1, 2, 3], [4, null, 6]]"),
    (
        "categorical series",
        r#"[
            {"name": "app1", "data": [{"x": "10.10", "y": 5}]},
            {"name": "app2", "data": [{"x": "10.10", "y": 7}]},
            {"name": "app3", "data": [{"x": "10.11", "y": 9}]},
            {"name": "app4", "data": [{"x": "10.11", "y": 3}]}
        ]"#,
    ),
];

/// Maximum number of axis labels printed per sample.
const MAX_TICKS: usize = 4;

fn main() -> Result<(), Box<dyn Error>> {
    let level = env::var("CONTOUR_LOG")
        .ok()
        .and_then(|l| l.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        for (label, text) in SAMPLES {
            run(label, text)?;
        }
    } else {
        for path in &paths {
            let text = fs::read_to_string(path)?;
            run(path, &text)?;
        }
    }

    helpers_demo()
}

fn run(label: &str, text: &str) -> Result<(), Box<dyn Error>> {
    let input = SeriesInput::from_json_str(text)?;
    let shape = classify(&input);
    tracing::info!(label, ?shape, len = input.len(), "loaded input");

    let stacked = StackLayout::new().apply(input);
    let domain = ordered_x_domain(&stacked);
    let ticks = max_tick_values(MAX_TICKS, &domain);

    println!("== {label} ({shape:?})");
    println!("{}", serde_json::to_string_pretty(&stacked)?);
    let ticks: Vec<String> = ticks.iter().map(ToString::to_string).collect();
    println!("ticks: {}", ticks.join(", "));
    Ok(())
}

fn helpers_demo() -> Result<(), Box<dyn Error>> {
    const FORMAT: &str = "%Y-%m-%d %H:%M";
    let a = NaiveDateTime::parse_from_str("2010-01-02 10:00", FORMAT)?;
    let b = NaiveDateTime::parse_from_str("2010-01-01 10:00", FORMAT)?;

    println!("== helpers");
    println!("date_diff(2010-01-02 10:00, 2010-01-01 10:00) = {}", date_diff(a, b));
    println!("round_to_nearest(7, 14) = {}", round_to_nearest(7.0, 14.0));
    println!("round_to_nearest(7, 10) = {}", round_to_nearest(7.0, 10.0));
    let domain: Vec<u32> = (1..=10).collect();
    println!("max_tick_values(5, 1..=10) = {:?}", max_tick_values(5, &domain));
    Ok(())
}
