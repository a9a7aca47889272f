/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::Level;

use super::EventEmitter;
use crate::MetricEvent;

/// An emitter that will just log each event as a json line at the specified level.
pub struct LogEventEmitter {
    level: Level,
}

impl LogEventEmitter {
    pub fn new(level: Level) -> Self {
        LogEventEmitter { level }
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogEventEmitter {
    fn default() -> Self {
        LogEventEmitter::new(Level::Info)
    }
}

impl EventEmitter for LogEventEmitter {
    fn emit(&self, event_name: &str, event: &MetricEvent) {
        log::log!(self.level, "{event_name}: {event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level() {
        let emitter = LogEventEmitter::default();
        assert_eq!(emitter.level(), Level::Info);
        // no logger installed, this should be a no-op
        emitter.emit("telemetry", &MetricEvent::new());
    }
}
