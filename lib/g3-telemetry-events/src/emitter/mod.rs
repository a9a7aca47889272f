/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use crate::MetricEvent;

mod memory;
pub use memory::MemoryEventEmitter;

mod log;
pub use self::log::LogEventEmitter;

/// An event emitter, which dispatches events by event name.
pub trait EventEmitter: Send + Sync {
    fn emit(&self, event_name: &str, event: &MetricEvent);
}

pub type ArcEventEmitter = Arc<dyn EventEmitter>;

impl<F> EventEmitter for F
where
    F: Fn(&str, &MetricEvent) + Send + Sync,
{
    fn emit(&self, event_name: &str, event: &MetricEvent) {
        self(event_name, event)
    }
}
