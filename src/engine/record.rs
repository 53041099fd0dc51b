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

use crate::engine::Level;

/// A field value, as encoded into the JSON line.
pub use serde_json::Value;

/// A key-value pair attached to an event.
pub type Field = (String, Value);

/// A fully assembled event, ready to be encoded.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    context: &'a [Field],
    fields: &'a [Field],
    message: &'a str,
}

impl<'a> Record<'a> {
    pub(crate) fn new(
        level: Level,
        context: &'a [Field],
        fields: &'a [Field],
        message: &'a str,
    ) -> Self {
        Record {
            level,
            context,
            fields,
            message,
        }
    }

    /// The severity of the event.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Fields inherited from the logger's context, followed by the event's own fields.
    pub fn fields(&self) -> impl Iterator<Item = &'a Field> + 'a {
        self.context.iter().chain(self.fields.iter())
    }

    /// The rendered message; empty when the event was sent without one.
    pub fn message(&self) -> &'a str {
        self.message
    }
}
