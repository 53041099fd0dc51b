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
use std::io;
use std::sync::Arc;

use crate::Context;
use crate::append::Append;
use crate::append::Stdout;
use crate::append::Writer;
use crate::engine;
use crate::hlog;
use crate::options::Opt;
use crate::options::Options;
use crate::to_engine_level;

/// A [`hlog::FullLogger`] backed by the structured [`engine::Logger`].
///
/// Every call is forwarded to the engine event of the matching severity and written as one
/// JSON line:
///
/// | framework level | engine level |
/// |---|---|
/// | trace, debug | debug |
/// | info | info |
/// | notice, warn | warn |
/// | error | error |
/// | fatal | fatal |
/// | anything else | warn |
///
/// Fatal calls exit the process after the event is written.
///
/// [`Control`](hlog::Control) methods take `&mut self` and the logger adds no locking of its
/// own: changing the level or the output of a logger shared between threads requires the
/// caller to synchronise access, e.g. with a `RwLock`.
///
/// # Examples
///
/// ```
/// use logforth_hlog::Logger;
/// use logforth_hlog::hlog::FormatLogger;
/// use logforth_hlog::hlog::Logger as _;
/// use logforth_hlog::with_field;
///
/// let logger = Logger::new([with_field("service", "logging")]);
/// logger.info(&"starting");
/// logger.infof(format_args!("listening on port {}", 8080));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    log: engine::Logger,
    out: Arc<dyn Append>,
    level: engine::Level,
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(Vec::new())
    }
}

impl Logger {
    /// Create a logger writing to stdout, configured by `opts` in order.
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Logger {
        Logger::from_logger(engine::Logger::new(Stdout::default()), opts)
    }

    /// Adopt an existing engine logger, keeping its fields, hooks, level and output, then
    /// apply `opts` in order.
    pub fn from_logger(log: engine::Logger, opts: impl IntoIterator<Item = Opt>) -> Logger {
        let opts = Options::new(log, opts);
        let log = opts.context.logger();
        Logger {
            out: log.output().clone(),
            log,
            level: opts.level,
        }
    }

    /// The engine logger calls are forwarded to.
    pub fn logger(&self) -> &engine::Logger {
        &self.log
    }

    /// The active output.
    pub fn output(&self) -> &Arc<dyn Append> {
        &self.out
    }

    /// The active minimum level.
    pub fn level(&self) -> engine::Level {
        self.level
    }

    /// Log `v` at `level`.
    #[track_caller]
    pub fn log(&self, level: hlog::Level, v: &dyn fmt::Display) {
        self.log.event(dispatch_level(level)).msg_fmt(format_args!("{v}"));
    }

    /// Log the formatted `args` at `level`.
    #[track_caller]
    pub fn logf(&self, level: hlog::Level, args: fmt::Arguments<'_>) {
        self.log.event(dispatch_level(level)).msg_fmt(args);
    }

    /// Log the formatted `args` at `level` through the logger resolved from `ctx`.
    ///
    /// This logger is attached to `ctx` first, so the resolved logger is this one unless it
    /// is disabled; `ctx` itself is left unchanged.
    #[track_caller]
    pub fn ctx_logf(&self, level: hlog::Level, ctx: &Context, args: fmt::Arguments<'_>) {
        let ctx = self.log.with_context(ctx);
        engine::Logger::from_context(&ctx)
            .event(dispatch_level(level))
            .msg_fmt(args);
    }
}

fn dispatch_level(level: hlog::Level) -> engine::Level {
    match level {
        hlog::Level::TRACE | hlog::Level::DEBUG => engine::Level::Debug,
        hlog::Level::INFO => engine::Level::Info,
        hlog::Level::NOTICE | hlog::Level::WARN => engine::Level::Warn,
        hlog::Level::ERROR => engine::Level::Error,
        hlog::Level::FATAL => engine::Level::Fatal,
        _ => engine::Level::Warn,
    }
}

impl hlog::Logger for Logger {
    #[track_caller]
    fn trace(&self, v: &dyn fmt::Display) {
        self.log(hlog::Level::TRACE, v)
    }

    #[track_caller]
    fn debug(&self, v: &dyn fmt::Display) {
        self.log(hlog::Level::DEBUG, v)
    }

    #[track_caller]
    fn info(&self, v: &dyn fmt::Display) {
        self.log(hlog::Level::INFO, v)
    }

    #[track_caller]
    fn notice(&self, v: &dyn fmt::Display) {
        self.log(hlog::Level::NOTICE, v)
    }

    #[track_caller]
    fn warn(&self, v: &dyn fmt::Display) {
        self.log(hlog::Level::WARN, v)
    }

    #[track_caller]
    fn error(&self, v: &dyn fmt::Display) {
        self.log(hlog::Level::ERROR, v)
    }

    #[track_caller]
    fn fatal(&self, v: &dyn fmt::Display) {
        self.log(hlog::Level::FATAL, v)
    }
}

impl hlog::FormatLogger for Logger {
    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.logf(hlog::Level::TRACE, args)
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(hlog::Level::DEBUG, args)
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(hlog::Level::INFO, args)
    }

    #[track_caller]
    fn noticef(&self, args: fmt::Arguments<'_>) {
        self.logf(hlog::Level::NOTICE, args)
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(hlog::Level::WARN, args)
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(hlog::Level::ERROR, args)
    }

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(hlog::Level::FATAL, args)
    }
}

impl hlog::CtxLogger for Logger {
    #[track_caller]
    fn ctx_tracef(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.ctx_logf(hlog::Level::TRACE, ctx, args)
    }

    #[track_caller]
    fn ctx_debugf(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.ctx_logf(hlog::Level::DEBUG, ctx, args)
    }

    #[track_caller]
    fn ctx_infof(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.ctx_logf(hlog::Level::INFO, ctx, args)
    }

    #[track_caller]
    fn ctx_noticef(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.ctx_logf(hlog::Level::NOTICE, ctx, args)
    }

    #[track_caller]
    fn ctx_warnf(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.ctx_logf(hlog::Level::WARN, ctx, args)
    }

    #[track_caller]
    fn ctx_errorf(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.ctx_logf(hlog::Level::ERROR, ctx, args)
    }

    #[track_caller]
    fn ctx_fatalf(&self, ctx: &Context, args: fmt::Arguments<'_>) {
        self.ctx_logf(hlog::Level::FATAL, ctx, args)
    }
}

impl hlog::Control for Logger {
    fn set_level(&mut self, level: hlog::Level) {
        let level = to_engine_level(level);
        self.level = level;
        self.log = self.log.with_level(level);
    }

    fn set_output(&mut self, output: Box<dyn io::Write + Send>) {
        let out: Arc<dyn Append> = Arc::new(Writer::new(output));
        self.out = out.clone();
        self.log = self.log.with_shared_output(out);
    }
}
