/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::ConfigError;

mod value;
pub use value::MetricValue;

mod fields;
pub use fields::{
    HISTOGRAM_MEASURE_FIELDS, METER_RATE_FIELDS, StatFields, TIMER_MEASURE_FIELDS,
    TIMER_RATE_FIELDS,
};

mod snapshot;
pub use snapshot::{
    CounterSnapshot, GaugeSnapshot, HistogramSnapshot, MeterSnapshot, Metadata, MetricKind,
    MetricsSnapshot, ScalarSnapshot, TimerSnapshot,
};

mod event;
pub use event::{DEFAULT_EVENT_NAME, MetricEvent};

mod emitter;
pub use emitter::{ArcEventEmitter, EventEmitter, LogEventEmitter, MemoryEventEmitter};

mod telemetry;
pub use telemetry::{ArcTelemetrySink, TelemetryEvents, TelemetrySink};

mod config;
pub use config::{MetricEventsConfig, PackageInfo};

mod mapper;
pub use mapper::MetricEvents;
