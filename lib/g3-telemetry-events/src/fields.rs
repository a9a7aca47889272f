/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub const HISTOGRAM_MEASURE_FIELDS: &[&str] = &[
    "max",
    "mean",
    "median",
    "min",
    "percentile75",
    "percentile95",
    "percentile98",
    "percentile99",
    "percentile999",
    "standardDeviation",
];

pub const METER_RATE_FIELDS: &[&str] = &[
    "meanRate",
    "oneMinuteRate",
    "fiveMinuteRate",
    "fifteenMinuteRate",
];

pub const TIMER_RATE_FIELDS: &[&str] = METER_RATE_FIELDS;
pub const TIMER_MEASURE_FIELDS: &[&str] = HISTOGRAM_MEASURE_FIELDS;

/// The statistic field names published by the metrics registry.
///
/// Only the fields listed here are copied from a snapshot into the nested
/// event value, all other statistic entries of the snapshot are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatFields {
    pub histogram: Vec<String>,
    pub meter: Vec<String>,
    pub timer_rate: Vec<String>,
    pub timer_measure: Vec<String>,
}

fn to_owned_list(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

impl Default for StatFields {
    fn default() -> Self {
        StatFields {
            histogram: to_owned_list(HISTOGRAM_MEASURE_FIELDS),
            meter: to_owned_list(METER_RATE_FIELDS),
            timer_rate: to_owned_list(TIMER_RATE_FIELDS),
            timer_measure: to_owned_list(TIMER_MEASURE_FIELDS),
        }
    }
}
