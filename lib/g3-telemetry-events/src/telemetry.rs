/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use log::warn;
use serde_json::{Map, Value};

use crate::event::timestamp_now;
use crate::{ArcEventEmitter, ConfigError, DEFAULT_EVENT_NAME, MetricEvent, PackageInfo};

/// A telemetry collaborator, which takes over stamping and dispatching of
/// events built by the mapper.
///
/// The returned event is handed back to the caller of the mapper.
pub trait TelemetrySink: Send + Sync {
    fn emit(&self, event: MetricEvent) -> MetricEvent;
}

pub type ArcTelemetrySink = Arc<dyn TelemetrySink>;

impl<F> TelemetrySink for F
where
    F: Fn(MetricEvent) -> MetricEvent + Send + Sync,
{
    fn emit(&self, event: MetricEvent) -> MetricEvent {
        self(event)
    }
}

/// Stamp events with timestamp and provenance before passing them to an
/// optional emitter.
///
/// Each sink that handles an event appends its `{module, version}` entry to
/// the `provenance` list of the event.
pub struct TelemetryEvents {
    package: PackageInfo,
    emitter: Option<ArcEventEmitter>,
    event_name: String,
}

impl TelemetryEvents {
    pub fn new(
        package: PackageInfo,
        emitter: Option<ArcEventEmitter>,
        event_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        if emitter.is_none() && event_name.is_some() {
            return Err(ConfigError::EventNameWithoutEmitter);
        }
        Ok(TelemetryEvents {
            package,
            emitter,
            event_name: event_name.unwrap_or_else(|| DEFAULT_EVENT_NAME.to_string()),
        })
    }

    #[inline]
    pub fn package(&self) -> &PackageInfo {
        &self.package
    }

    #[inline]
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    fn provenance_entry(&self) -> Value {
        let mut map = Map::with_capacity(2);
        map.insert("module".to_string(), Value::String(self.package.name.clone()));
        map.insert(
            "version".to_string(),
            Value::String(self.package.version.clone()),
        );
        Value::Object(map)
    }

    fn stamp(&self, event: &mut MetricEvent) {
        if !event.contains_key("timestamp") {
            event.insert("timestamp", Value::String(timestamp_now()));
        }

        let entry = self.provenance_entry();
        match event.get_mut("provenance") {
            Some(Value::Array(list)) => list.push(entry),
            Some(v) => {
                warn!("replace non-list provenance value {v} of telemetry event");
                *v = Value::Array(vec![entry]);
            }
            None => {
                event.insert("provenance", Value::Array(vec![entry]));
            }
        }
    }
}

impl TelemetrySink for TelemetryEvents {
    fn emit(&self, mut event: MetricEvent) -> MetricEvent {
        self.stamp(&mut event);
        if let Some(emitter) = &self.emitter {
            emitter.emit(&self.event_name, &event);
        }
        event
    }
}
