/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single numeric value computed by the metrics registry.
///
/// Integers keep their sign class so that they are rendered without a
/// fractional part, the way the registry reports them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Unsigned(u64),
    Signed(i64),
    Double(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Double(f) => *f,
            MetricValue::Signed(i) => *i as f64,
            MetricValue::Unsigned(u) => *u as f64,
        }
    }

    /// Json has no representation for NaN and infinity, they become `null`.
    pub fn to_json_value(&self) -> Value {
        match self {
            MetricValue::Double(f) => Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            MetricValue::Signed(i) => Value::Number(Number::from(*i)),
            MetricValue::Unsigned(u) => Value::Number(Number::from(*u)),
        }
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Unsigned(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        if value >= 0 {
            MetricValue::Unsigned(value as u64)
        } else {
            MetricValue::Signed(value)
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Double(value)
    }
}

impl From<MetricValue> for Value {
    fn from(value: MetricValue) -> Self {
        value.to_json_value()
    }
}
