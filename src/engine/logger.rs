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

use std::io;
use std::panic::Location;
use std::sync::Arc;

use crate::Context;
use crate::DefaultTrap;
use crate::Trap;
use crate::append::Append;
use crate::append::Writer;
use crate::engine::ContextBuilder;
use crate::engine::Event;
use crate::engine::Field;
use crate::engine::Hook;
use crate::engine::Level;

/// A structured logger writing one JSON object per event.
///
/// A logger is an immutable value that is cheap to clone. Deriving methods such as
/// [`Logger::with_level`] return a new logger and leave the original untouched.
///
/// # Examples
///
/// ```
/// use logforth_hlog::append::Stdout;
/// use logforth_hlog::engine::Level;
/// use logforth_hlog::engine::Logger;
///
/// let logger = Logger::new(Stdout::default()).with_level(Level::Info);
/// logger.info().field("port", 8080).msg("listening");
/// logger.debug().msg("not written");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    pub(crate) level: Level,
    pub(crate) append: Arc<dyn Append>,
    pub(crate) fields: Arc<Vec<Field>>,
    pub(crate) hooks: Vec<Arc<dyn Hook>>,
    pub(crate) trap: Arc<dyn Trap>,
}

impl Logger {
    /// Create a logger writing to `append`, enabled for every level.
    pub fn new(append: impl Append) -> Logger {
        Logger {
            level: Level::Trace,
            append: Arc::new(append),
            fields: Arc::new(vec![]),
            hooks: vec![],
            trap: Arc::new(DefaultTrap::default()),
        }
    }

    /// A logger that writes nothing.
    pub fn disabled() -> Logger {
        Logger::new(Writer::new(io::sink())).with_level(Level::Disabled)
    }

    /// The minimum level of this logger.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether an event at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        self.level != Level::Disabled && level != Level::Disabled && level >= self.level
    }

    /// The destination of this logger.
    pub fn output(&self) -> &Arc<dyn Append> {
        &self.append
    }

    /// A copy of this logger with a different minimum level.
    pub fn with_level(&self, level: Level) -> Logger {
        Logger {
            level,
            ..self.clone()
        }
    }

    /// A copy of this logger writing to `append`.
    pub fn with_output(&self, append: impl Append) -> Logger {
        self.with_shared_output(Arc::new(append))
    }

    /// A copy of this logger writing to an already shared appender.
    pub fn with_shared_output(&self, append: Arc<dyn Append>) -> Logger {
        Logger {
            append,
            ..self.clone()
        }
    }

    /// A copy of this logger with one more hook, run after the existing ones.
    pub fn with_hook(&self, hook: impl Hook) -> Logger {
        let mut logger = self.clone();
        logger.hooks.push(Arc::new(hook));
        logger
    }

    /// A copy of this logger reporting failures to `trap`.
    pub fn with_trap(&self, trap: impl Trap) -> Logger {
        Logger {
            trap: Arc::new(trap),
            ..self.clone()
        }
    }

    /// Start building a child logger with extra context.
    pub fn with(&self) -> ContextBuilder {
        ContextBuilder::new(self.clone())
    }

    /// Start an event at `level`.
    #[track_caller]
    pub fn event(&self, level: Level) -> Event<'_> {
        Event::new(self, level, Location::caller())
    }

    /// Start an event at [`Level::Trace`].
    #[track_caller]
    pub fn trace(&self) -> Event<'_> {
        self.event(Level::Trace)
    }

    /// Start an event at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self) -> Event<'_> {
        self.event(Level::Debug)
    }

    /// Start an event at [`Level::Info`].
    #[track_caller]
    pub fn info(&self) -> Event<'_> {
        self.event(Level::Info)
    }

    /// Start an event at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&self) -> Event<'_> {
        self.event(Level::Warn)
    }

    /// Start an event at [`Level::Error`].
    #[track_caller]
    pub fn error(&self) -> Event<'_> {
        self.event(Level::Error)
    }

    /// Start an event at [`Level::Fatal`]; finishing it exits the process.
    #[track_caller]
    pub fn fatal(&self) -> Event<'_> {
        self.event(Level::Fatal)
    }

    /// Start an event at [`Level::Panic`]; finishing it panics.
    #[track_caller]
    pub fn panic(&self) -> Event<'_> {
        self.event(Level::Panic)
    }

    /// Attach this logger to a copy of `ctx`.
    ///
    /// A disabled logger is not stored into a context that carries no logger yet; `ctx` is
    /// returned as is in that case.
    pub fn with_context(&self, ctx: &Context) -> Context {
        if ctx.logger().is_none() && self.level == Level::Disabled {
            return ctx.clone();
        }
        ctx.with_logger(self.clone())
    }

    /// The logger attached to `ctx`, or a disabled logger if there is none.
    pub fn from_context(ctx: &Context) -> Logger {
        ctx.logger().cloned().unwrap_or_else(Logger::disabled)
    }

    /// Flush the destination, reporting failures to the trap.
    pub fn flush(&self) {
        if let Err(err) = self.append.flush() {
            self.trap.trap(&err);
        }
    }
}
