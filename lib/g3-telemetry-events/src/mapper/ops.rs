/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::MetricEvents;
use crate::{
    CounterSnapshot, GaugeSnapshot, HistogramSnapshot, MeterSnapshot, MetricEvent, MetricKind,
    MetricValue, TimerSnapshot,
};

struct ValueRecord {
    map: Map<String, Value>,
}

impl ValueRecord {
    fn new() -> Self {
        ValueRecord { map: Map::new() }
    }

    fn add_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(s) = value {
            self.map.insert(key.to_string(), Value::String(s.to_string()));
        }
    }

    fn add_value(&mut self, key: &str, value: Option<&MetricValue>) {
        if let Some(v) = value {
            self.map.insert(key.to_string(), v.to_json_value());
        }
    }

    fn add_stats(&mut self, fields: &[String], stats: &BTreeMap<String, Option<MetricValue>>) {
        for field in fields {
            if let Some(Some(v)) = stats.get(field) {
                self.map.insert(field.clone(), v.to_json_value());
            }
        }
    }

    fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl MetricEvents {
    /// Build a `counter` event, with `value` and `unit` taken from the snapshot.
    pub fn counter(&self, name: &str, c: &CounterSnapshot) -> MetricEvent {
        self.counter_with_unit_opt(name, c.unit.as_deref(), c)
    }

    /// Same as [`MetricEvents::counter`], but use the given unit.
    pub fn counter_with_unit(&self, name: &str, unit: &str, c: &CounterSnapshot) -> MetricEvent {
        self.counter_with_unit_opt(name, Some(unit), c)
    }

    fn counter_with_unit_opt(
        &self,
        name: &str,
        unit: Option<&str>,
        c: &CounterSnapshot,
    ) -> MetricEvent {
        let value = c.value.as_ref().map(MetricValue::to_json_value);
        self.finish(MetricKind::Counter, name, value, unit, c.metadata.as_ref())
    }

    /// Build a `gauge` event, with `value` and `unit` taken from the snapshot.
    pub fn gauge(&self, name: &str, g: &GaugeSnapshot) -> MetricEvent {
        self.gauge_with_unit_opt(name, g.unit.as_deref(), g)
    }

    /// Same as [`MetricEvents::gauge`], but use the given unit.
    pub fn gauge_with_unit(&self, name: &str, unit: &str, g: &GaugeSnapshot) -> MetricEvent {
        self.gauge_with_unit_opt(name, Some(unit), g)
    }

    fn gauge_with_unit_opt(
        &self,
        name: &str,
        unit: Option<&str>,
        g: &GaugeSnapshot,
    ) -> MetricEvent {
        let value = g.value.as_ref().map(MetricValue::to_json_value);
        self.finish(MetricKind::Gauge, name, value, unit, g.metadata.as_ref())
    }

    /// Build a `histogram` event.
    ///
    /// The event value contains `measureUnit`, `sampleSize`, `sampleSizeUnit`
    /// and all configured histogram statistic fields.
    pub fn histogram(&self, name: &str, h: &HistogramSnapshot) -> MetricEvent {
        self.histogram_with_units_opt(
            name,
            h.measure_unit.as_deref(),
            h.sample_size_unit.as_deref(),
            h,
        )
    }

    pub fn histogram_with_units(
        &self,
        name: &str,
        measure_unit: &str,
        sample_size_unit: &str,
        h: &HistogramSnapshot,
    ) -> MetricEvent {
        self.histogram_with_units_opt(name, Some(measure_unit), Some(sample_size_unit), h)
    }

    fn histogram_with_units_opt(
        &self,
        name: &str,
        measure_unit: Option<&str>,
        sample_size_unit: Option<&str>,
        h: &HistogramSnapshot,
    ) -> MetricEvent {
        let mut record = ValueRecord::new();
        record.add_str("measureUnit", measure_unit);
        record.add_value("sampleSize", h.sample_size.as_ref());
        record.add_str("sampleSizeUnit", sample_size_unit);
        record.add_stats(&self.fields.histogram, &h.stats);
        self.finish(
            MetricKind::Histogram,
            name,
            Some(record.into_value()),
            None,
            h.metadata.as_ref(),
        )
    }

    /// Build a `meter` event.
    ///
    /// The event value contains `rateUnit`, `updateCount`, `updateCountUnit`
    /// and all configured meter rate fields.
    pub fn meter(&self, name: &str, m: &MeterSnapshot) -> MetricEvent {
        self.meter_with_units_opt(
            name,
            m.rate_unit.as_deref(),
            m.update_count_unit.as_deref(),
            m,
        )
    }

    pub fn meter_with_units(
        &self,
        name: &str,
        rate_unit: &str,
        update_count_unit: &str,
        m: &MeterSnapshot,
    ) -> MetricEvent {
        self.meter_with_units_opt(name, Some(rate_unit), Some(update_count_unit), m)
    }

    fn meter_with_units_opt(
        &self,
        name: &str,
        rate_unit: Option<&str>,
        update_count_unit: Option<&str>,
        m: &MeterSnapshot,
    ) -> MetricEvent {
        let mut record = ValueRecord::new();
        record.add_str("rateUnit", rate_unit);
        record.add_value("updateCount", m.update_count.as_ref());
        record.add_str("updateCountUnit", update_count_unit);
        record.add_stats(&self.fields.meter, &m.stats);
        self.finish(
            MetricKind::Meter,
            name,
            Some(record.into_value()),
            None,
            m.metadata.as_ref(),
        )
    }

    /// Build a `timer` event.
    ///
    /// The event value contains `measureUnit`, `rateUnit`, `sampleSize`,
    /// `sampleSizeUnit`, `updateCount`, all configured timer rate fields and
    /// all configured timer measure fields.
    pub fn timer(&self, name: &str, t: &TimerSnapshot) -> MetricEvent {
        self.timer_with_units_opt(
            name,
            t.measure_unit.as_deref(),
            t.rate_unit.as_deref(),
            t.sample_size_unit.as_deref(),
            t,
        )
    }

    pub fn timer_with_units(
        &self,
        name: &str,
        measure_unit: &str,
        rate_unit: &str,
        sample_size_unit: &str,
        t: &TimerSnapshot,
    ) -> MetricEvent {
        self.timer_with_units_opt(
            name,
            Some(measure_unit),
            Some(rate_unit),
            Some(sample_size_unit),
            t,
        )
    }

    fn timer_with_units_opt(
        &self,
        name: &str,
        measure_unit: Option<&str>,
        rate_unit: Option<&str>,
        sample_size_unit: Option<&str>,
        t: &TimerSnapshot,
    ) -> MetricEvent {
        let mut record = ValueRecord::new();
        record.add_str("measureUnit", measure_unit);
        record.add_str("rateUnit", rate_unit);
        record.add_value("sampleSize", t.sample_size.as_ref());
        record.add_str("sampleSizeUnit", sample_size_unit);
        record.add_value("updateCount", t.update_count.as_ref());
        record.add_stats(&self.fields.timer_rate, &t.stats);
        record.add_stats(&self.fields.timer_measure, &t.stats);
        self.finish(
            MetricKind::Timer,
            name,
            Some(record.into_value()),
            None,
            t.metadata.as_ref(),
        )
    }
}
