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

use std::sync::Arc;

use crate::engine::Logger;
use crate::engine::Value;
use crate::engine::event::sorted_fields;
use crate::engine::hook::CallerHook;
use crate::engine::hook::TimestampHook;

/// A builder for a child [`Logger`] that carries extra context.
///
/// Obtained from [`Logger::with`]. Every event of the built logger carries the fields and
/// hooks added here, in the order they were added.
///
/// # Examples
///
/// ```
/// use logforth_hlog::append::Stdout;
/// use logforth_hlog::engine::Logger;
///
/// let logger = Logger::new(Stdout::default())
///     .with()
///     .field("service", "billing")
///     .timestamp()
///     .logger();
/// logger.info().msg("started");
/// ```
#[must_use = "call `logger` to build the child logger"]
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    logger: Logger,
}

impl ContextBuilder {
    pub(crate) fn new(logger: Logger) -> Self {
        ContextBuilder { logger }
    }

    /// Add a field to every event.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.logger.fields).push((key.into(), value.into()));
        self
    }

    /// Add fields to every event, sorted by key.
    pub fn fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Arc::make_mut(&mut self.logger.fields).extend(sorted_fields(fields));
        self
    }

    /// Add a `time` field to every event.
    pub fn timestamp(mut self) -> Self {
        self.logger.hooks.push(Arc::new(TimestampHook));
        self
    }

    /// Add a `caller` field with the `file:line` of the logging call to every event.
    pub fn caller(mut self) -> Self {
        self.logger.hooks.push(Arc::new(CallerHook));
        self
    }

    /// Build the child logger.
    pub fn logger(self) -> Logger {
        self.logger
    }
}
