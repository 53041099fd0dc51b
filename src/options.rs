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

//! Functional options for [`Logger`](crate::Logger) construction.
//!
//! Each option is one self-contained change. Options are applied in the order they are
//! given, so a later option overrides an earlier one touching the same concern.

use std::fmt;
use std::io;

use crate::Trap;
use crate::append::Append;
use crate::append::Writer;
use crate::engine;
use crate::engine::ContextBuilder;
use crate::engine::Event;
use crate::engine::Field;
use crate::engine::Hook;
use crate::engine::HookFn;
use crate::engine::Value;
use crate::hlog;
use crate::time::TimeFormat;
use crate::time::set_time_field_format;
use crate::to_engine_level;

/// The accumulator options are folded over.
#[derive(Debug)]
pub(crate) struct Options {
    pub(crate) context: ContextBuilder,
    pub(crate) level: engine::Level,
}

impl Options {
    pub(crate) fn new(log: engine::Logger, opts: impl IntoIterator<Item = Opt>) -> Options {
        let mut options = Options {
            level: log.level(),
            context: log.with(),
        };
        for opt in opts {
            (opt.f)(&mut options);
        }
        options
    }

    fn update(&mut self, f: impl FnOnce(ContextBuilder) -> ContextBuilder) {
        self.context = f(self.context.clone());
    }

    fn update_logger(&mut self, f: impl FnOnce(engine::Logger) -> engine::Logger) {
        self.update(|context| f(context.logger()).with());
    }
}

/// A single configuration step for a [`Logger`](crate::Logger).
pub struct Opt {
    f: Box<dyn FnOnce(&mut Options) + Send>,
}

impl fmt::Debug for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opt {{ ... }}")
    }
}

impl Opt {
    fn new(f: impl FnOnce(&mut Options) + Send + 'static) -> Self {
        Opt { f: Box::new(f) }
    }
}

/// Set the minimum level.
pub fn with_level(level: hlog::Level) -> Opt {
    let level = to_engine_level(level);
    Opt::new(move |opts| {
        opts.update_logger(|logger| logger.with_level(level));
        opts.level = level;
    })
}

/// Attach a field to every event.
pub fn with_field(name: impl Into<String>, value: impl Into<Value>) -> Opt {
    let name = name.into();
    let value = value.into();
    Opt::new(move |opts| opts.update(|context| context.field(name, value)))
}

/// Attach fields to every event, sorted by key.
pub fn with_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Opt
where
    K: Into<String>,
    V: Into<Value>,
{
    let fields = fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect::<Vec<Field>>();
    Opt::new(move |opts| opts.update(|context| context.fields(fields)))
}

/// Add a `time` field to every event.
pub fn with_timestamp() -> Opt {
    Opt::new(|opts| opts.update(ContextBuilder::timestamp))
}

/// Set the process-wide time field format, then add a `time` field to every event.
///
/// The format changes when the option is applied, and affects every logger.
pub fn with_formatted_timestamp(format: impl Into<TimeFormat>) -> Opt {
    let format = format.into();
    Opt::new(move |opts| {
        set_time_field_format(format);
        opts.update(ContextBuilder::timestamp);
    })
}

/// Add a `caller` field with the `file:line` of the logging call to every event.
pub fn with_caller() -> Opt {
    Opt::new(|opts| opts.update(ContextBuilder::caller))
}

/// Install a hook run on every emitted event.
pub fn with_hook(hook: impl Hook) -> Opt {
    Opt::new(move |opts| opts.update_logger(|logger| logger.with_hook(hook)))
}

/// Install a closure run on every emitted event.
pub fn with_hook_fn<F>(f: F) -> Opt
where
    F: Fn(&mut Event<'_>, engine::Level, &str) + Send + Sync + 'static,
{
    with_hook(HookFn::new(f))
}

/// Write events to `writer`.
pub fn with_output(writer: impl io::Write + Send + 'static) -> Opt {
    with_append(Writer::new(writer))
}

/// Write events to an engine appender.
pub fn with_append(append: impl Append) -> Opt {
    Opt::new(move |opts| opts.update_logger(|logger| logger.with_output(append)))
}

/// Report encoding and write failures to `trap`.
pub fn with_trap(trap: impl Trap) -> Opt {
    Opt::new(move |opts| opts.update_logger(|logger| logger.with_trap(trap)))
}
