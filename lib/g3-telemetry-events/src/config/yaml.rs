/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use super::{MetricEventsConfig, PackageInfo};
use crate::StatFields;

fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

fn as_string_list(v: &Yaml) -> anyhow::Result<Vec<String>> {
    match v {
        Yaml::Array(seq) => {
            let mut list = Vec::with_capacity(seq.len());
            for (i, v) in seq.iter().enumerate() {
                let s = as_string(v).context(format!("invalid string value for #{i}"))?;
                list.push(s);
            }
            Ok(list)
        }
        Yaml::String(s) => Ok(vec![s.to_string()]),
        _ => Err(anyhow!(
            "yaml value type for string list should be 'array' or 'string'"
        )),
    }
}

impl PackageInfo {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        let Yaml::Hash(map) = v else {
            return Err(anyhow!("yaml value type for 'package' should be 'map'"));
        };

        let mut name: Option<String> = None;
        let mut version: Option<String> = None;
        foreach_kv(map, |k, v| match normalize(k).as_str() {
            "name" | "module" => {
                name = Some(as_string(v).context(format!("invalid string value for key {k}"))?);
                Ok(())
            }
            "version" => {
                version =
                    Some(as_string(v).context(format!("invalid string value for key {k}"))?);
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        })?;

        match (name, version) {
            (Some(name), Some(version)) => Ok(PackageInfo { name, version }),
            (None, _) => Err(anyhow!("no package name has been set")),
            (_, None) => Err(anyhow!("no package version has been set")),
        }
    }
}

impl StatFields {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        let Yaml::Hash(map) = v else {
            return Err(anyhow!("yaml value type for 'stat fields' should be 'map'"));
        };

        let mut fields = StatFields::default();
        foreach_kv(map, |k, v| {
            let list = as_string_list(v).context(format!("invalid field list for key {k}"))?;
            match normalize(k).as_str() {
                "histogram" | "histogram_measure" => fields.histogram = list,
                "meter" | "meter_rate" => fields.meter = list,
                "timer_rate" => fields.timer_rate = list,
                "timer_measure" => fields.timer_measure = list,
                _ => return Err(anyhow!("invalid key {k}")),
            }
            Ok(())
        })?;
        Ok(fields)
    }
}

impl MetricEventsConfig {
    /// Parse the data part of the config. Emitter and telemetry sink are
    /// runtime objects and should be set afterwards.
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = MetricEventsConfig::default();
            foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'metric events config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize(k).as_str() {
            "package" => {
                let package =
                    PackageInfo::parse_yaml(v).context(format!("invalid value for key {k}"))?;
                self.set_package(package);
                Ok(())
            }
            "event_name" | "event" => {
                let name = as_string(v).context(format!("invalid string value for key {k}"))?;
                self.set_event_name(name);
                Ok(())
            }
            "stat_fields" | "fields" => {
                let fields =
                    StatFields::parse_yaml(v).context(format!("invalid value for key {k}"))?;
                self.set_stat_fields(fields);
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}
