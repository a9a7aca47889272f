/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde::{Deserialize, Serialize};

use super::Metadata;
use crate::MetricValue;

/// Snapshot of a metric holding a single value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

pub type CounterSnapshot = ScalarSnapshot;
pub type GaugeSnapshot = ScalarSnapshot;

impl ScalarSnapshot {
    pub fn new<V: Into<MetricValue>>(value: V) -> Self {
        ScalarSnapshot {
            value: Some(value.into()),
            unit: None,
            metadata: None,
        }
    }

    pub fn with_unit<T: Into<String>>(mut self, unit: T) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
