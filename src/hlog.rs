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

//! The pluggable logging interface of the hlog web framework.
//!
//! A backend implements [`FullLogger`]: the plain, formatted and context-scoped methods for
//! each severity, plus [`Control`] to change the level and the output at runtime.
//! [`Logger`](crate::Logger) is the implementation provided by this crate.

use std::fmt;
use std::io;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;

pub use crate::context::Context;
use crate::Error;

/// Severity of a framework log call.
///
/// The framework defines seven levels, ordered from [`Level::TRACE`] to [`Level::FATAL`].
/// The type is backed by an integer, so values outside that set can exist (for instance a
/// level added by a newer framework version); backends treat them as unknown.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Designates very low priority, often extremely verbose, information.
    pub const TRACE: Level = Level(0);
    /// Designates lower priority information.
    pub const DEBUG: Level = Level(1);
    /// Designates useful information.
    pub const INFO: Level = Level(2);
    /// Designates normal but significant conditions.
    pub const NOTICE: Level = Level(3);
    /// Designates hazardous situations.
    pub const WARN: Level = Level(4);
    /// Designates very serious errors.
    pub const ERROR: Level = Level(5);
    /// Designates errors after which the process cannot continue.
    pub const FATAL: Level = Level(6);

    /// Create a level from its raw value.
    pub const fn from_raw(raw: u8) -> Level {
        Level(raw)
    }

    /// The raw value of this level.
    pub const fn into_raw(self) -> u8 {
        self.0
    }

    /// The name of a known level, or `None` for an unknown one.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Level::TRACE => Some("trace"),
            Level::DEBUG => Some("debug"),
            Level::INFO => Some("info"),
            Level::NOTICE => Some("notice"),
            Level::WARN => Some("warn"),
            Level::ERROR => Some("error"),
            Level::FATAL => Some("fatal"),
            _ => None,
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => f.pad(&format!("level({})", self.0)),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for level in [
            Level::TRACE,
            Level::DEBUG,
            Level::INFO,
            Level::NOTICE,
            Level::WARN,
            Level::ERROR,
            Level::FATAL,
        ] {
            if level.name().is_some_and(|name| s.eq_ignore_ascii_case(name)) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Plain logging: the message is the value's [`Display`](fmt::Display) output.
///
/// Several values are logged as one message by concatenating them with [`format_args!`]:
///
/// ```
/// use logforth_hlog::Logger;
/// use logforth_hlog::hlog::Logger as _;
///
/// let logger = Logger::default();
/// let (user, id) = ("alice", 42);
/// logger.info(&format_args!("{user}{id}"));
/// ```
pub trait Logger {
    fn trace(&self, v: &dyn fmt::Display);
    fn debug(&self, v: &dyn fmt::Display);
    fn info(&self, v: &dyn fmt::Display);
    fn notice(&self, v: &dyn fmt::Display);
    fn warn(&self, v: &dyn fmt::Display);
    fn error(&self, v: &dyn fmt::Display);
    fn fatal(&self, v: &dyn fmt::Display);
}

/// Formatted logging: the message is rendered from [`format_args!`] arguments.
pub trait FormatLogger {
    fn tracef(&self, args: fmt::Arguments<'_>);
    fn debugf(&self, args: fmt::Arguments<'_>);
    fn infof(&self, args: fmt::Arguments<'_>);
    fn noticef(&self, args: fmt::Arguments<'_>);
    fn warnf(&self, args: fmt::Arguments<'_>);
    fn errorf(&self, args: fmt::Arguments<'_>);
    fn fatalf(&self, args: fmt::Arguments<'_>);
}

/// Formatted logging scoped to a request [`Context`].
pub trait CtxLogger {
    fn ctx_tracef(&self, ctx: &Context, args: fmt::Arguments<'_>);
    fn ctx_debugf(&self, ctx: &Context, args: fmt::Arguments<'_>);
    fn ctx_infof(&self, ctx: &Context, args: fmt::Arguments<'_>);
    fn ctx_noticef(&self, ctx: &Context, args: fmt::Arguments<'_>);
    fn ctx_warnf(&self, ctx: &Context, args: fmt::Arguments<'_>);
    fn ctx_errorf(&self, ctx: &Context, args: fmt::Arguments<'_>);
    fn ctx_fatalf(&self, ctx: &Context, args: fmt::Arguments<'_>);
}

/// Runtime control of a backend.
pub trait Control {
    /// Set the minimum level; calls below it produce no output.
    fn set_level(&mut self, level: Level);

    /// Redirect the output of subsequent calls.
    fn set_output(&mut self, output: Box<dyn io::Write + Send>);
}

/// Everything the framework requires from a logging backend.
pub trait FullLogger: Logger + FormatLogger + CtxLogger + Control {}

impl<T> FullLogger for T where T: Logger + FormatLogger + CtxLogger + Control {}
