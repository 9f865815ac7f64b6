// Copyright 2025 the Contour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON ingestion (`json` feature).
//!
//! JSON objects are recognized by the keys they carry, the same way chart data written for
//! JavaScript charting libraries is: `{name, data}` is a series, `{x, y}` (or either key
//! alone) is a point.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::{Map, Value};

use crate::{Datum, SeriesInput, XValue};

impl From<Value> for Datum {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(Self::Missing, Self::Number),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(obj) => object_datum(obj),
            Value::Null | Value::Bool(_) | Value::String(_) => Self::Missing,
        }
    }
}

fn object_datum(mut obj: Map<String, Value>) -> Datum {
    if obj.contains_key("name") && obj.contains_key("data") {
        let name = match obj.remove("name") {
            Some(Value::String(s)) => Some(s),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        let data = match obj.remove("data") {
            Some(Value::Array(items)) => items.into_iter().map(Datum::from).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => alloc::vec![Datum::from(other)],
        };
        return Datum::Series { name, data };
    }
    if obj.contains_key("x") || obj.contains_key("y") {
        let x = obj.remove("x").and_then(x_value);
        let y = obj.remove("y").and_then(|y| y.as_f64());
        return Datum::Point { x, y };
    }
    Datum::Missing
}

fn x_value(value: Value) -> Option<XValue> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(match n.as_f64() {
            Some(v) => XValue::Number(v),
            None => XValue::Label(n.to_string()),
        }),
        Value::String(s) => Some(XValue::Label(s)),
        other => Some(XValue::Label(other.to_string())),
    }
}

impl From<Value> for SeriesInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Loose(items.into_iter().map(Datum::from).collect()),
            _ => Self::default(),
        }
    }
}

impl SeriesInput {
    /// Parses JSON text into a loose input.
    ///
    /// Only malformed JSON is an error; any well-formed value is accepted.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Value>(text).map(Self::from)
    }
}
