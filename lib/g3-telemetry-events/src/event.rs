/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use chrono::format::Numeric::*;
use chrono::format::{Fixed, Item, Pad};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Metadata;

pub const DEFAULT_EVENT_NAME: &str = "telemetry";

const ISO8601_UTC_MILLISECOND: &[Item<'static>] = &[
    Item::Numeric(Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Day, Pad::Zero),
    Item::Literal("T"),
    Item::Numeric(Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond3),
    Item::Literal("Z"),
];

pub(crate) fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format_with_items(ISO8601_UTC_MILLISECOND.iter())
        .to_string()
}

pub(crate) fn timestamp_now() -> String {
    format_timestamp(&Utc::now())
}

/// A flat telemetry event record.
///
/// The record serializes as a plain json object. Keys are unique, setting an
/// existing key replaces its value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricEvent {
    fields: Map<String, Value>,
}

impl MetricEvent {
    pub fn new() -> Self {
        MetricEvent::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Copy every metadata entry onto the event, replacing fields of the same
    /// name. The metadata itself is left as is.
    ///
    /// Returns the keys that replaced an existing field.
    pub(crate) fn merge_metadata<'a>(&mut self, metadata: &'a Metadata) -> Vec<&'a str> {
        let mut replaced = Vec::new();
        for (k, v) in metadata {
            if self.fields.insert(k.clone(), v.clone()).is_some() {
                replaced.push(k.as_str());
            }
        }
        replaced
    }
}

impl fmt::Display for MetricEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
