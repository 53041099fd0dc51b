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

//! The format of the `time` field.

use std::sync::PoisonError;
use std::sync::RwLock;

use jiff::Zoned;
use serde::Deserialize;

use crate::Error;
use crate::engine::Value;

static TIME_FIELD_FORMAT: RwLock<TimeFormat> = RwLock::new(TimeFormat::Rfc3339);

/// How the `time` field of an event is rendered.
///
/// The format is process-wide; see [`set_time_field_format`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// RFC 3339 with second precision, e.g. `2024-08-11T22:44:57+08:00`.
    #[default]
    Rfc3339,
    /// RFC 3339 with fractional seconds, e.g. `2024-08-11T22:44:57.172051+08:00`.
    Rfc3339Nano,
    /// Seconds since the Unix epoch, as a JSON number.
    Unix,
    /// Milliseconds since the Unix epoch, as a JSON number.
    UnixMs,
    /// Microseconds since the Unix epoch, as a JSON number.
    UnixMicro,
    /// Nanoseconds since the Unix epoch, as a JSON number.
    UnixNano,
    /// A `strftime`-style format string, as understood by [`jiff::fmt::strtime`].
    Strftime(String),
}

impl From<&str> for TimeFormat {
    fn from(format: &str) -> Self {
        TimeFormat::Strftime(format.to_string())
    }
}

impl From<String> for TimeFormat {
    fn from(format: String) -> Self {
        TimeFormat::Strftime(format)
    }
}

const RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";
const RFC3339_NANO: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

impl TimeFormat {
    /// Render `now` as a field value.
    pub fn format(&self, now: &Zoned) -> Result<Value, Error> {
        let ts = now.timestamp();
        let value = match self {
            TimeFormat::Rfc3339 => strftime(RFC3339, now)?.into(),
            TimeFormat::Rfc3339Nano => strftime(RFC3339_NANO, now)?.into(),
            TimeFormat::Unix => ts.as_second().into(),
            TimeFormat::UnixMs => ts.as_millisecond().into(),
            TimeFormat::UnixMicro => ts.as_microsecond().into(),
            // nanoseconds since the epoch overflow i64 only after year 2262
            TimeFormat::UnixNano => i64::try_from(ts.as_nanosecond())
                .unwrap_or(i64::MAX)
                .into(),
            TimeFormat::Strftime(format) => strftime(format, now)?.into(),
        };
        Ok(value)
    }
}

fn strftime(format: &str, now: &Zoned) -> Result<String, Error> {
    jiff::fmt::strtime::format(format, now).map_err(|err| {
        Error::new("failed to format time field")
            .with_context("format", format)
            .with_source(err)
    })
}

/// Set the process-wide format of the `time` field.
///
/// Affects every logger, including the ones created before the call.
pub fn set_time_field_format(format: impl Into<TimeFormat>) {
    let format = format.into();
    *TIME_FIELD_FORMAT
        .write()
        .unwrap_or_else(PoisonError::into_inner) = format;
}

/// The process-wide format of the `time` field.
pub fn time_field_format() -> TimeFormat {
    TIME_FIELD_FORMAT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
