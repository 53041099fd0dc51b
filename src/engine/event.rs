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

use std::fmt;
use std::panic::Location;

use crate::Error;
use crate::engine::Field;
use crate::engine::Level;
use crate::engine::Logger;
use crate::engine::Record;
use crate::engine::Value;
use crate::layout::JsonLayout;

/// A leveled event under construction, obtained from [`Logger::event`] or one of the
/// per-level shortcuts such as [`Logger::info`].
///
/// An event is written when finished with [`Event::msg`], [`Event::msg_fmt`] or
/// [`Event::send`]. An event below the logger's level is inert: adding fields is a no-op,
/// nothing is written and hooks do not run.
///
/// Finishing an event at [`Level::Fatal`] exits the process with status 1 after the event
/// is written and the output flushed. Finishing an event at [`Level::Panic`] panics with the
/// message. Both happen even when the event is disabled or discarded.
#[must_use = "call `msg`, `msg_fmt` or `send` to write the event"]
#[derive(Debug)]
pub struct Event<'a> {
    logger: &'a Logger,
    level: Level,
    enabled: bool,
    discarded: bool,
    fields: Vec<Field>,
    location: &'static Location<'static>,
    source: Option<(String, u32)>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(
        logger: &'a Logger,
        level: Level,
        location: &'static Location<'static>,
    ) -> Self {
        Event {
            logger,
            level,
            enabled: logger.enabled(level),
            discarded: false,
            fields: vec![],
            location,
            source: None,
        }
    }

    /// The level the event is written at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether the event passes the logger's level and has not been discarded.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.discarded
    }

    /// The source location of the logging call.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The `file` and `line` reported for the event.
    ///
    /// This is the location of the logging call unless it was replaced with
    /// [`Event::source`].
    pub fn caller(&self) -> (&str, u32) {
        match &self.source {
            Some((file, line)) => (file.as_str(), *line),
            None => (self.location.file(), self.location.line()),
        }
    }

    /// Report `file:line` as the origin of the event instead of the logging call, e.g. for
    /// records forwarded from another logging facade.
    pub fn source(mut self, file: impl Into<String>, line: u32) -> Self {
        if self.enabled {
            self.source = Some((file.into(), line));
        }
        self
    }

    /// Add a field to the event.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add fields to the event, sorted by key.
    pub fn fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        if self.enabled {
            self.fields.extend(sorted_fields(fields));
        }
        self
    }

    /// Add a field in place; this is how hooks extend an event.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if self.enabled {
            self.fields.push((key.into(), value.into()));
        }
    }

    /// Drop the event: it is not written, though a fatal or panic event still ends the
    /// process or thread.
    pub fn discard(&mut self) {
        self.discarded = true;
    }

    /// Finish the event with a message.
    pub fn msg(self, message: &str) {
        if self.enabled {
            self.emit(message);
        } else {
            self.finish(message);
        }
    }

    /// Finish the event with a message rendered from format arguments.
    ///
    /// The arguments are only rendered if the event is enabled.
    pub fn msg_fmt(self, args: fmt::Arguments<'_>) {
        if !self.enabled {
            if matches!(self.level, Level::Fatal | Level::Panic) {
                self.finish(&args.to_string());
            }
            return;
        }
        match args.as_str() {
            Some(message) => self.emit(message),
            None => self.emit(&args.to_string()),
        }
    }

    /// Finish the event without a message.
    pub fn send(self) {
        self.msg("")
    }

    pub(crate) fn trap(&self, err: &Error) {
        self.logger.trap.trap(err);
    }

    fn emit(mut self, message: &str) {
        let logger = self.logger;
        let level = self.level;

        for hook in logger.hooks.iter() {
            hook.run(&mut self, level, message);
        }

        if !self.discarded {
            let record = Record::new(level, &logger.fields, &self.fields, message);
            let result = JsonLayout::default()
                .format(&record)
                .and_then(|bytes| logger.append.append(level, &bytes));
            if let Err(err) = result {
                logger.trap.trap(&err.with_context("level", level));
            }
        }

        self.finish(message);
    }

    fn finish(&self, message: &str) {
        match self.level {
            Level::Fatal => {
                self.logger.flush();
                std::process::exit(1);
            }
            Level::Panic => panic!("{message}"),
            _ => {}
        }
    }
}

pub(crate) fn sorted_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Vec<Field>
where
    K: Into<String>,
    V: Into<Value>,
{
    let mut fields = fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect::<Vec<Field>>();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
}
