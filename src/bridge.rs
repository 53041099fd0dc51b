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

//! Route records of the [`log`] crate into a [`Logger`].

use crate::Logger;
use crate::engine;
use crate::engine::Value;

/// A [`log::Log`] implementation forwarding records to the engine logger of a [`Logger`].
///
/// Levels map one to one (`log` has no notice or fatal level). The record target is added
/// as a `target` field, followed by the record's key-values in order. When the record
/// carries a file and line, they are reported as the `caller`.
///
/// # Examples
///
/// ```
/// use logforth_hlog::Logger;
/// use logforth_hlog::bridge::LogBridge;
///
/// let logger = Logger::default();
/// LogBridge::new(&logger).from_env("RUST_LOG").apply().unwrap();
/// log::info!("routed through the bridge");
/// ```
#[derive(Debug)]
pub struct LogBridge {
    logger: engine::Logger,
    filter: Option<env_filter::Filter>,
}

impl LogBridge {
    /// Forward records to the engine logger currently held by `logger`.
    ///
    /// Later [`set_level`](crate::hlog::Control::set_level) or
    /// [`set_output`](crate::hlog::Control::set_output) calls on `logger` do not affect the
    /// bridge.
    pub fn new(logger: &Logger) -> LogBridge {
        LogBridge {
            logger: logger.logger().clone(),
            filter: None,
        }
    }

    /// Only forward records accepted by `filter`.
    pub fn filter(mut self, filter: env_filter::Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Only forward records accepted by the directives in the environment variable `env`,
    /// e.g. `RUST_LOG=warn,my_app=debug`. An unset variable accepts only errors.
    pub fn from_env(self, env: &str) -> Self {
        self.filter(env_filter::Builder::from_env(env).build())
    }

    /// Set up the bridge as the global [`log`] logger.
    ///
    /// # Errors
    ///
    /// Return an error if a global logger has already been set.
    pub fn apply(self) -> Result<(), log::SetLoggerError> {
        let max_level = self
            .filter
            .as_ref()
            .map_or(log::LevelFilter::Trace, env_filter::Filter::filter);
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

fn engine_level(level: log::Level) -> engine::Level {
    match level {
        log::Level::Error => engine::Level::Error,
        log::Level::Warn => engine::Level::Warn,
        log::Level::Info => engine::Level::Info,
        log::Level::Debug => engine::Level::Debug,
        log::Level::Trace => engine::Level::Trace,
    }
}

struct KvCollector<'a> {
    kvs: &'a mut Vec<(String, Value)>,
}

impl<'kvs> log::kv::VisitSource<'kvs> for KvCollector<'_> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        let value = serde_json::to_value(&value).unwrap_or_else(|_| value.to_string().into());
        self.kvs.push((key.to_string(), value));
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|filter| filter.enabled(metadata))
            && self.logger.enabled(engine_level(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if self
            .filter
            .as_ref()
            .is_some_and(|filter| !filter.matches(record))
        {
            return;
        }

        let mut kvs = vec![];
        let mut visitor = KvCollector { kvs: &mut kvs };
        // a failing source keeps the pairs visited before the failure
        let _ = record.key_values().visit(&mut visitor);

        let mut event = self
            .logger
            .event(engine_level(record.level()))
            .field("target", record.target());
        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            event = event.source(file, line);
        }
        for (key, value) in kvs {
            event = event.field(key, value);
        }
        event.msg_fmt(*record.args());
    }

    fn flush(&self) {
        self.logger.flush();
    }
}
