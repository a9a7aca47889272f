/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde::{Deserialize, Serialize};

use super::{Metadata, StatMap};
use crate::MetricValue;

/// Snapshot of a timer, which is a meter for the rate of the timed events
/// together with a histogram of their durations.
///
/// Rate and measure statistics share one map, the configured field lists tell
/// them apart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_count: Option<MetricValue>,
    // not part of the timer event value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_count_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(flatten)]
    pub stats: StatMap,
}

impl TimerSnapshot {
    pub fn with_units<M, R, S>(
        mut self,
        measure_unit: M,
        rate_unit: R,
        sample_size_unit: S,
    ) -> Self
    where
        M: Into<String>,
        R: Into<String>,
        S: Into<String>,
    {
        self.measure_unit = Some(measure_unit.into());
        self.rate_unit = Some(rate_unit.into());
        self.sample_size_unit = Some(sample_size_unit.into());
        self
    }

    pub fn with_counts<S, U>(mut self, sample_size: S, update_count: U) -> Self
    where
        S: Into<MetricValue>,
        U: Into<MetricValue>,
    {
        self.sample_size = Some(sample_size.into());
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
