/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use indexmap::IndexMap;
use log::{debug, trace};
use serde_json::Value;

use crate::event::timestamp_now;
use crate::{
    ArcEventEmitter, ArcTelemetrySink, ConfigError, DEFAULT_EVENT_NAME, Metadata, MetricEvent,
    MetricEventsConfig, MetricKind, MetricsSnapshot, PackageInfo, StatFields,
};

mod ops;

enum Dispatch {
    Standalone {
        package: PackageInfo,
        emitter: Option<ArcEventEmitter>,
        event_name: String,
    },
    Delegated(ArcTelemetrySink),
}

/// Map metric snapshots to telemetry events and hand them to the configured sink.
///
/// In standalone mode each event is stamped with `timestamp`, `module` and
/// `version` and emitted to the emitter, if there is one. In delegated mode the
/// telemetry sink gets the bare metric event, and what it returns is returned
/// to the caller.
pub struct MetricEvents {
    dispatch: Dispatch,
    fields: StatFields,
}

type KindHandler = fn(&MetricEvents, &MetricsSnapshot, &mut Vec<MetricEvent>);

const KIND_HANDLERS: [(MetricKind, KindHandler); 5] = [
    (MetricKind::Counter, map_counters),
    (MetricKind::Gauge, map_gauges),
    (MetricKind::Histogram, map_histograms),
    (MetricKind::Meter, map_meters),
    (MetricKind::Timer, map_timers),
];

fn map_each<T, F>(entries: Option<&IndexMap<String, T>>, events: &mut Vec<MetricEvent>, f: F)
where
    F: Fn(&str, &T) -> MetricEvent,
{
    if let Some(entries) = entries {
        for (name, snapshot) in entries {
            events.push(f(name, snapshot));
        }
    }
}

fn map_counters(m: &MetricEvents, s: &MetricsSnapshot, events: &mut Vec<MetricEvent>) {
    map_each(s.counters.as_ref(), events, |name, c| m.counter(name, c));
}

fn map_gauges(m: &MetricEvents, s: &MetricsSnapshot, events: &mut Vec<MetricEvent>) {
    map_each(s.gauges.as_ref(), events, |name, g| m.gauge(name, g));
}

fn map_histograms(m: &MetricEvents, s: &MetricsSnapshot, events: &mut Vec<MetricEvent>) {
    map_each(s.histograms.as_ref(), events, |name, h| m.histogram(name, h));
}

fn map_meters(m: &MetricEvents, s: &MetricsSnapshot, events: &mut Vec<MetricEvent>) {
    map_each(s.meters.as_ref(), events, |name, v| m.meter(name, v));
}

fn map_timers(m: &MetricEvents, s: &MetricsSnapshot, events: &mut Vec<MetricEvent>) {
    map_each(s.timers.as_ref(), events, |name, t| m.timer(name, t));
}

impl MetricEvents {
    pub fn new(config: MetricEventsConfig) -> Result<Self, ConfigError> {
        let dispatch = match config.telemetry {
            Some(telemetry) => {
                if config.package.is_some() {
                    return Err(ConfigError::ConflictingMode("package"));
                }
                if config.emitter.is_some() {
                    return Err(ConfigError::ConflictingMode("emitter"));
                }
                if config.event_name.is_some() {
                    return Err(ConfigError::ConflictingMode("event_name"));
                }
                Dispatch::Delegated(telemetry)
            }
            None => {
                let Some(package) = config.package else {
                    return Err(ConfigError::MissingProperty("package"));
                };
                if config.emitter.is_none() && config.event_name.is_some() {
                    return Err(ConfigError::EventNameWithoutEmitter);
                }
                Dispatch::Standalone {
                    package,
                    emitter: config.emitter,
                    event_name: config
                        .event_name
                        .unwrap_or_else(|| DEFAULT_EVENT_NAME.to_string()),
                }
            }
        };
        Ok(MetricEvents {
            dispatch,
            fields: config.stat_fields,
        })
    }

    #[inline]
    pub fn stat_fields(&self) -> &StatFields {
        &self.fields
    }

    pub fn is_delegated(&self) -> bool {
        matches!(self.dispatch, Dispatch::Delegated(_))
    }

    /// The event name used in standalone mode.
    pub fn event_name(&self) -> Option<&str> {
        match &self.dispatch {
            Dispatch::Standalone { event_name, .. } => Some(event_name),
            Dispatch::Delegated(_) => None,
        }
    }

    /// Emit the event to the configured emitter under the configured event name.
    ///
    /// This only works in standalone mode. Without an emitter, or in delegated
    /// mode, nothing will be done.
    pub fn emit(&self, event: &MetricEvent) {
        if let Dispatch::Standalone {
            emitter: Some(emitter),
            event_name,
            ..
        } = &self.dispatch
        {
            trace!("emit {event_name} event {event}");
            emitter.emit(event_name, event);
        }
    }

    /// Map all snapshots of the set, kind by kind, in the order of each collection.
    pub fn metrics(&self, snapshots: &MetricsSnapshot) -> Vec<MetricEvent> {
        let mut events = Vec::new();
        for (kind, handler) in KIND_HANDLERS {
            if let Some(n) = snapshots.count(kind) {
                trace!("mapping {n} {} snapshots", kind.collection_key());
                handler(self, snapshots, &mut events);
            }
        }
        events
    }

    fn finish(
        &self,
        kind: MetricKind,
        name: &str,
        value: Option<Value>,
        unit: Option<&str>,
        metadata: Option<&Metadata>,
    ) -> MetricEvent {
        let mut event = MetricEvent::new();
        event.insert("type", Value::String("metric".to_string()));
        if let Dispatch::Standalone { package, .. } = &self.dispatch {
            event.insert("timestamp", Value::String(timestamp_now()));
            event.insert("module", Value::String(package.name.clone()));
            event.insert("version", Value::String(package.version.clone()));
        }
        event.insert("name", Value::String(name.to_string()));
        if let Some(value) = value {
            event.insert("value", value);
        }
        if let Some(unit) = unit {
            event.insert("unit", Value::String(unit.to_string()));
        }
        event.insert("target_type", Value::String(kind.as_str().to_string()));

        if let Some(metadata) = metadata {
            for key in event.merge_metadata(metadata) {
                debug!("metadata key {key} overrides default field of {kind} event {name}");
            }
        }

        match &self.dispatch {
            Dispatch::Standalone { .. } => {
                self.emit(&event);
                event
            }
            Dispatch::Delegated(telemetry) => telemetry.emit(event),
        }
    }
}
