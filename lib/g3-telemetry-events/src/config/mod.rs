/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde::{Deserialize, Serialize};

use crate::{ArcEventEmitter, ArcTelemetrySink, StatFields};

#[cfg(feature = "yaml")]
mod yaml;

/// Name and version of the package that reports the metrics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

impl PackageInfo {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> Self {
        PackageInfo {
            name: name.into(),
            version: version.into(),
        }
    }
}

#[derive(Clone, Default)]
pub struct MetricEventsConfig {
    pub(crate) package: Option<PackageInfo>,
    pub(crate) emitter: Option<ArcEventEmitter>,
    pub(crate) event_name: Option<String>,
    pub(crate) telemetry: Option<ArcTelemetrySink>,
    pub(crate) stat_fields: StatFields,
}

impl MetricEventsConfig {
    /// Config for the standalone mode, in which events are stamped and
    /// emitted by the mapper itself.
    pub fn standalone(package: PackageInfo) -> Self {
        MetricEventsConfig::default().with_package(package)
    }

    /// Config for the delegated mode, in which the telemetry sink stamps and
    /// dispatches the events.
    pub fn delegated(telemetry: ArcTelemetrySink) -> Self {
        MetricEventsConfig::default().with_telemetry(telemetry)
    }

    pub fn set_package(&mut self, package: PackageInfo) {
        self.package = Some(package);
    }

    pub fn set_emitter(&mut self, emitter: ArcEventEmitter) {
        self.emitter = Some(emitter);
    }

    pub fn set_event_name<T: Into<String>>(&mut self, event_name: T) {
        self.event_name = Some(event_name.into());
    }

    pub fn set_telemetry(&mut self, telemetry: ArcTelemetrySink) {
        self.telemetry = Some(telemetry);
    }

    pub fn set_stat_fields(&mut self, stat_fields: StatFields) {
        self.stat_fields = stat_fields;
    }

    pub fn with_package(mut self, package: PackageInfo) -> Self {
        self.set_package(package);
        self
    }

    pub fn with_emitter(mut self, emitter: ArcEventEmitter) -> Self {
        self.set_emitter(emitter);
        self
    }

    pub fn with_event_name<T: Into<String>>(mut self, event_name: T) -> Self {
        self.set_event_name(event_name);
        self
    }

    pub fn with_telemetry(mut self, telemetry: ArcTelemetrySink) -> Self {
        self.set_telemetry(telemetry);
        self
    }

    pub fn with_stat_fields(mut self, stat_fields: StatFields) -> Self {
        self.set_stat_fields(stat_fields);
        self
    }

    #[inline]
    pub fn package(&self) -> Option<&PackageInfo> {
        self.package.as_ref()
    }

    #[inline]
    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    #[inline]
    pub fn stat_fields(&self) -> &StatFields {
        &self.stat_fields
    }
}
