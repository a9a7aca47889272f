/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::{Arc, Mutex};

use chrono::DateTime;
use serde_json::{Value, json};

use g3_telemetry_events::{
    ArcTelemetrySink, CounterSnapshot, MemoryEventEmitter, Metadata, MetricEvent, MetricEvents,
    MetricEventsConfig, PackageInfo, TelemetryEvents, TimerSnapshot,
};

fn package() -> PackageInfo {
    PackageInfo::new("g3-telemetry-events", "0.1.0")
}

fn telemetry_mapper() -> (MetricEvents, Arc<MemoryEventEmitter>) {
    let emitter = Arc::new(MemoryEventEmitter::new());
    let telemetry = TelemetryEvents::new(package(), Some(emitter.clone()), None).unwrap();
    let config = MetricEventsConfig::delegated(Arc::new(telemetry));
    (MetricEvents::new(config).unwrap(), emitter)
}

fn metadata(v: Value) -> Metadata {
    v.as_object().unwrap().clone()
}

/// Check the stamped fields and return the rest of the event.
fn strip_common(event: &MetricEvent) -> Value {
    let ts = event.get_str("timestamp").unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    assert_eq!(ts.len(), 24);

    let mut event = event.clone();
    event.remove("timestamp");
    let provenance = event.remove("provenance").unwrap();
    assert_eq!(
        provenance,
        json!([{"module": "g3-telemetry-events", "version": "0.1.0"}])
    );
    event.into_value()
}

#[test]
fn counter_event() {
    let (mapper, emitter) = telemetry_mapper();
    let c = CounterSnapshot::new(0u64).with_unit("some_unit");
    let event = mapper.counter("some_name", &c);
    assert_eq!(
        strip_common(&event),
        json!({
            "type": "metric",
            "name": "some_name",
            "target_type": "counter",
            "value": 0,
            "unit": "some_unit",
        })
    );

    let emitted = emitter.events();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].0, "telemetry");
    assert_eq!(emitted[0].1, event);
}

#[test]
fn counter_event_with_metadata() {
    let (mapper, _) = telemetry_mapper();
    let c = CounterSnapshot::new(0u64)
        .with_unit("some_unit")
        .with_metadata(metadata(json!({"some_tag": "some_tag"})));
    let event = mapper.counter("some_name", &c);
    assert_eq!(
        strip_common(&event),
        json!({
            "type": "metric",
            "name": "some_name",
            "target_type": "counter",
            "value": 0,
            "unit": "some_unit",
            "some_tag": "some_tag",
        })
    );
}

#[test]
fn metadata_provenance_is_not_changed() {
    let (mapper, _) = telemetry_mapper();
    let c = CounterSnapshot::new(0u64)
        .with_unit("some_unit")
        .with_metadata(metadata(json!({"provenance": []})));
    let event = mapper.counter("some_name", &c);
    assert_eq!(
        event.get("provenance"),
        Some(&json!([{"module": "g3-telemetry-events", "version": "0.1.0"}]))
    );
    assert_eq!(c.metadata, Some(metadata(json!({"provenance": []}))));
}

#[test]
fn timer_metadata_overrides_type() {
    let (mapper, _) = telemetry_mapper();
    let t = TimerSnapshot::default()
        .with_units("some_measureUnit", "some_rateUnit", "some_sampleSizeUnit")
        .with_counts(0u64, 0u64)
        .with_metadata(metadata(json!({"type": "blah"})));
    let event = mapper.timer("some_name", &t);
    let rest = strip_common(&event);
    assert_eq!(rest["type"], json!("blah"));
    assert_eq!(rest["name"], json!("some_name"));
    assert_eq!(rest["target_type"], json!("timer"));
    assert_eq!(rest["value"]["measureUnit"], json!("some_measureUnit"));
    assert_eq!(rest["value"]["updateCount"], json!(0));
}

#[test]
fn return_what_telemetry_returns() {
    let emitted: Arc<Mutex<Vec<MetricEvent>>> = Arc::default();
    let emitted2 = emitted.clone();
    let telemetry: ArcTelemetrySink = Arc::new(move |mut event: MetricEvent| {
        event.insert("handled_by", json!("sink"));
        emitted2.lock().unwrap().push(event.clone());
        event
    });
    let mapper = MetricEvents::new(MetricEventsConfig::delegated(telemetry)).unwrap();

    let c = CounterSnapshot::new(0u64).with_unit("some_unit");
    let event = mapper.counter("some_name", &c);
    assert_eq!(event.get_str("handled_by"), Some("sink"));
    assert!(!event.contains_key("timestamp"));
    assert!(!event.contains_key("module"));

    let emitted = emitted.lock().unwrap();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0], event);
}
