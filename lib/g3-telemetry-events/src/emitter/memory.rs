/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Mutex;

use super::EventEmitter;
use crate::MetricEvent;

/// Keep all emitted events in memory, in emit order.
#[derive(Default)]
pub struct MemoryEventEmitter {
    records: Mutex<Vec<(String, MetricEvent)>>,
}

impl MemoryEventEmitter {
    pub fn new() -> Self {
        MemoryEventEmitter::default()
    }

    /// Get a copy of all `(event_name, event)` pairs emitted so far.
    pub fn events(&self) -> Vec<(String, MetricEvent)> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl EventEmitter for MemoryEventEmitter {
    fn emit(&self, event_name: &str, event: &MetricEvent) {
        let mut records = self.records.lock().unwrap();
        records.push((event_name.to_string(), event.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_in_order() {
        let emitter = MemoryEventEmitter::new();
        assert!(emitter.is_empty());

        let mut e1 = MetricEvent::new();
        e1.insert("name", json!("a"));
        let mut e2 = MetricEvent::new();
        e2.insert("name", json!("b"));
        emitter.emit("telemetry", &e1);
        emitter.emit("other", &e2);

        let events = emitter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], ("telemetry".to_string(), e1));
        assert_eq!(events[1], ("other".to_string(), e2));

        emitter.clear();
        assert_eq!(emitter.len(), 0);
    }
}
