/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde::{Deserialize, Serialize};

use super::{Metadata, StatMap};
use crate::MetricValue;

/// Snapshot of a value distribution.
///
/// The distribution statistics (min, max, percentiles, ...) are kept by the
/// name the registry gives them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(flatten)]
    pub stats: StatMap,
}

impl HistogramSnapshot {
    pub fn with_units<M, S>(mut self, measure_unit: M, sample_size_unit: S) -> Self
    where
        M: Into<String>,
        S: Into<String>,
    {
        self.measure_unit = Some(measure_unit.into());
        self.sample_size_unit = Some(sample_size_unit.into());
        self
    }

    pub fn with_sample_size<V: Into<MetricValue>>(mut self, sample_size: V) -> Self {
        self.sample_size = Some(sample_size.into());
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
