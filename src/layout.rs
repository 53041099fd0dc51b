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

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::Error;
use crate::engine::Record;

/// The JSON layout of the engine: one object per line.
///
/// Output format:
///
/// ```json
/// {"level":"info","service":"logging","time":"2024-08-11T22:44:57+08:00","caller":"src/main.rs:12","message":"Hello info!"}
/// ```
///
/// Keys appear in this order: `level`, the logger's context fields, the event's fields,
/// fields added by hooks (such as `time` and `caller`), then `message`. The `message` key is
/// omitted when the message is empty. Duplicate keys are written as they are.
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct JsonLayout {}

struct RecordLine<'a> {
    record: &'a Record<'a>,
}

impl Serialize for RecordLine<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("level", self.record.level().as_str())?;
        for (key, value) in self.record.fields() {
            map.serialize_entry(key, value)?;
        }
        let message = self.record.message();
        if !message.is_empty() {
            map.serialize_entry("message", message)?;
        }
        map.end()
    }
}

impl JsonLayout {
    /// Encode the record as a single JSON line, including the trailing newline.
    pub fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::with_capacity(128);
        serde_json::to_writer(&mut bytes, &RecordLine { record })
            .map_err(Error::from_json_error)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
