// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Declarative logger configuration.

use serde::Deserialize;

use crate::Error;
use crate::append::Stderr;
use crate::append::Stdout;
use crate::engine::Value;
use crate::hlog;
use crate::options::Opt;
use crate::options::with_append;
use crate::options::with_caller;
use crate::options::with_fields;
use crate::options::with_formatted_timestamp;
use crate::options::with_level;
use crate::options::with_timestamp;
use crate::time::TimeFormat;

/// A logger configuration, typically read from a configuration file.
///
/// Every key is optional:
///
/// ```json
/// {
///   "level": "info",
///   "output": "stderr",
///   "fields": { "service": "billing" },
///   "timestamp": true,
///   "time_format": "unix_ms",
///   "caller": true
/// }
/// ```
///
/// `time_format` is one of `rfc3339`, `rfc3339_nano`, `unix`, `unix_ms`, `unix_micro`,
/// `unix_nano` or `{ "strftime": "<format>" }`, and implies `timestamp`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The minimum level.
    pub level: Option<hlog::Level>,
    /// Where events are written.
    pub output: Output,
    /// Fields attached to every event.
    pub fields: serde_json::Map<String, Value>,
    /// Whether events carry a `time` field.
    pub timestamp: bool,
    /// The process-wide format of the `time` field.
    pub time_format: Option<TimeFormat>,
    /// Whether events carry a `caller` field.
    pub caller: bool,
}

/// The destination named in a [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

impl Config {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Config, Error> {
        serde_json::from_str(json)
            .map_err(|err| Error::new("failed to parse logger config").with_source(err))
    }

    /// Turn the configuration into options, in the order output, fields, timestamp,
    /// caller, level.
    ///
    /// Options appended after these override them.
    pub fn into_options(self) -> Vec<Opt> {
        let mut opts = vec![];
        opts.push(match self.output {
            Output::Stdout => with_append(Stdout::default()),
            Output::Stderr => with_append(Stderr::default()),
        });
        if !self.fields.is_empty() {
            opts.push(with_fields(self.fields));
        }
        match self.time_format {
            Some(format) => opts.push(with_formatted_timestamp(format)),
            None if self.timestamp => opts.push(with_timestamp()),
            None => {}
        }
        if self.caller {
            opts.push(with_caller());
        }
        if let Some(level) = self.level {
            opts.push(with_level(level));
        }
        opts
    }
}
