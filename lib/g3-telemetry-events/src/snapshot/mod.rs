/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod scalar;
pub use scalar::{CounterSnapshot, GaugeSnapshot, ScalarSnapshot};

mod histogram;
pub use histogram::HistogramSnapshot;

mod meter;
pub use meter::MeterSnapshot;

mod timer;
pub use timer::TimerSnapshot;

/// Free form tags attached to a metric in the registry.
pub type Metadata = Map<String, Value>;

/// Statistics by name. A `null` entry, as written for a non-finite value, is
/// kept as `None`.
type StatMap = std::collections::BTreeMap<String, Option<crate::MetricValue>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
    Meter,
    Timer,
}

impl MetricKind {
    /// All kinds, in the order the registry groups its snapshots.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Counter,
        MetricKind::Gauge,
        MetricKind::Histogram,
        MetricKind::Meter,
        MetricKind::Timer,
    ];

    /// The value used for the `target_type` event field.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
            MetricKind::Meter => "meter",
            MetricKind::Timer => "timer",
        }
    }

    /// The key of the snapshot collection for this kind.
    pub fn collection_key(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counters",
            MetricKind::Gauge => "gauges",
            MetricKind::Histogram => "histograms",
            MetricKind::Meter => "meters",
            MetricKind::Timer => "timers",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All named snapshots taken from the registry at one point in time.
///
/// Every collection is optional, a partial set is valid input. The entries
/// of each collection keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counters: Option<IndexMap<String, CounterSnapshot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gauges: Option<IndexMap<String, GaugeSnapshot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histograms: Option<IndexMap<String, HistogramSnapshot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meters: Option<IndexMap<String, MeterSnapshot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timers: Option<IndexMap<String, TimerSnapshot>>,
}

impl MetricsSnapshot {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn from_json_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }

    pub fn add_counter(&mut self, name: impl Into<String>, snapshot: CounterSnapshot) {
        self.counters
            .get_or_insert_default()
            .insert(name.into(), snapshot);
    }

    pub fn add_gauge(&mut self, name: impl Into<String>, snapshot: GaugeSnapshot) {
        self.gauges
            .get_or_insert_default()
            .insert(name.into(), snapshot);
    }

    pub fn add_histogram(&mut self, name: impl Into<String>, snapshot: HistogramSnapshot) {
        self.histograms
            .get_or_insert_default()
            .insert(name.into(), snapshot);
    }

    pub fn add_meter(&mut self, name: impl Into<String>, snapshot: MeterSnapshot) {
        self.meters
            .get_or_insert_default()
            .insert(name.into(), snapshot);
    }

    pub fn add_timer(&mut self, name: impl Into<String>, snapshot: TimerSnapshot) {
        self.timers
            .get_or_insert_default()
            .insert(name.into(), snapshot);
    }

    /// Number of snapshots of the given kind, `None` if the collection is absent.
    pub fn count(&self, kind: MetricKind) -> Option<usize> {
        match kind {
            MetricKind::Counter => self.counters.as_ref().map(|m| m.len()),
            MetricKind::Gauge => self.gauges.as_ref().map(|m| m.len()),
            MetricKind::Histogram => self.histograms.as_ref().map(|m| m.len()),
            MetricKind::Meter => self.meters.as_ref().map(|m| m.len()),
            MetricKind::Timer => self.timers.as_ref().map(|m| m.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetricValue;

    #[test]
    fn kind_names() {
        let names: Vec<&str> = MetricKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["counter", "gauge", "histogram", "meter", "timer"]);
        let keys: Vec<&str> = MetricKind::ALL
            .iter()
            .map(|k| k.collection_key())
            .collect();
        assert_eq!(keys, ["counters", "gauges", "histograms", "meters", "timers"]);
        assert_eq!(MetricKind::Timer.to_string(), "timer");
    }

    #[test]
    fn parse_partial_set() {
        let s = r#"{
            "counters": {
                "zeta": {"value": 1, "unit": "Err"},
                "alpha": {"value": 2, "unit": "Err", "metadata": {"server": "foo"}}
            },
            "meters": {
                "requests": {
                    "rateUnit": "Req/s",
                    "updateCount": 3,
                    "updateCountUnit": "Req",
                    "meanRate": 0.5,
                    "oneMinuteRate": 0.25
                }
            }
        }"#;
        let set = MetricsSnapshot::from_json_str(s).unwrap();
        assert!(set.gauges.is_none());
        assert_eq!(set.count(MetricKind::Gauge), None);
        assert_eq!(set.count(MetricKind::Counter), Some(2));

        let counters = set.counters.as_ref().unwrap();
        let names: Vec<&str> = counters.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        let alpha = counters.get("alpha").unwrap();
        assert_eq!(alpha.value, Some(MetricValue::Unsigned(2)));
        assert_eq!(
            alpha.metadata.as_ref().unwrap().get("server"),
            Some(&Value::from("foo"))
        );

        let meter = set.meters.as_ref().unwrap().get("requests").unwrap();
        assert_eq!(meter.rate_unit.as_deref(), Some("Req/s"));
        assert_eq!(meter.update_count, Some(MetricValue::Unsigned(3)));
        assert_eq!(
            meter.stats.get("meanRate"),
            Some(&Some(MetricValue::Double(0.5)))
        );
        assert_eq!(meter.stats.len(), 2);
    }

    #[test]
    fn add_keeps_order() {
        let mut set = MetricsSnapshot::default();
        set.add_timer("b", TimerSnapshot::default());
        set.add_timer("a", TimerSnapshot::default());
        let names: Vec<&String> = set.timers.as_ref().unwrap().keys().collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(set.count(MetricKind::Counter), None);
    }

    #[test]
    fn parse_null_stat() {
        let s = r#"{"histograms":{"h":{"sampleSize":1,"min":3,"standardDeviation":null}}}"#;
        let set = MetricsSnapshot::from_json_str(s).unwrap();
        let h = set.histograms.as_ref().unwrap().get("h").unwrap();
        assert_eq!(h.sample_size, Some(MetricValue::Unsigned(1)));
        assert_eq!(h.stats.get("min"), Some(&Some(MetricValue::Unsigned(3))));
        assert_eq!(h.stats.get("standardDeviation"), Some(&None));
    }

    #[test]
    fn nan_stat_round_trip() {
        let mut set = MetricsSnapshot::default();
        set.add_histogram(
            "h",
            HistogramSnapshot::default().with_stat("standardDeviation", f64::NAN),
        );
        let s = serde_json::to_string(&set).unwrap();
        assert_eq!(s, r#"{"histograms":{"h":{"standardDeviation":null}}}"#);

        let parsed = MetricsSnapshot::from_json_str(&s).unwrap();
        let h = parsed.histograms.as_ref().unwrap().get("h").unwrap();
        assert_eq!(h.stats.get("standardDeviation"), Some(&None));
    }
}
