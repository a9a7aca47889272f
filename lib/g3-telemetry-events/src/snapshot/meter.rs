/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde::{Deserialize, Serialize};

use super::{Metadata, StatMap};
use crate::MetricValue;

/// Snapshot of an event rate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_count: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_count_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(flatten)]
    pub stats: StatMap,
}

impl MeterSnapshot {
    pub fn with_units<R, U>(mut self, rate_unit: R, update_count_unit: U) -> Self
    where
        R: Into<String>,
        U: Into<String>,
    {
        self.rate_unit = Some(rate_unit.into());
        self.update_count_unit = Some(update_count_unit.into());
        self
    }

    pub fn with_update_count<V: Into<MetricValue>>(mut self, update_count: V) -> Self {
        self.update_count = Some(update_count.into());
        self
    }

    pub fn with_stat<V: Into<MetricValue>>(mut self, field: &str, value: V) -> Self {
        self.stats.insert(field.to_string(), Some(value.into()));
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
