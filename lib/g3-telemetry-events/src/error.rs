/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config is missing required property: {0}")]
    MissingProperty(&'static str),
    #[error("'event_name' property specified in config without corresponding 'emitter' property")]
    EventNameWithoutEmitter,
    #[error("'telemetry' property can not be used together with '{0}' property")]
    ConflictingMode(&'static str),
}
