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

mod common;

use std::fs;

use common::SharedBuf;
use logforth_hlog::Context;
use logforth_hlog::Logger;
use logforth_hlog::append::Writer;
use logforth_hlog::engine;
use logforth_hlog::hlog;
use logforth_hlog::hlog::Control;
use logforth_hlog::hlog::CtxLogger;
use logforth_hlog::hlog::FormatLogger;
use logforth_hlog::hlog::Logger as _;
use logforth_hlog::with_output;

#[test]
fn test_from_logger_keeps_fields() {
    let buf = SharedBuf::default();
    let base = engine::Logger::new(Writer::new(buf.clone()))
        .with()
        .field("key", "test")
        .logger();

    let logger = Logger::from_logger(base, []);
    logger.info(&"foo");

    assert_eq!(
        buf.contents(),
        "{\"level\":\"info\",\"key\":\"test\",\"message\":\"foo\"}\n"
    );
}

#[test]
fn test_plain_levels() {
    let buf = SharedBuf::default();
    let logger = Logger::new([with_output(buf.clone())]);

    logger.trace(&"foo");
    logger.debug(&"foo");
    logger.info(&"foo");
    logger.notice(&"foo");
    logger.warn(&"foo");
    logger.error(&"foo");

    assert_eq!(
        buf.levels(),
        ["debug", "debug", "info", "warn", "warn", "error"]
    );
    assert!(buf.messages().iter().all(|msg| msg == "foo"));
}

#[test]
fn test_formatted_levels() {
    let buf = SharedBuf::default();
    let logger = Logger::new([with_output(buf.clone())]);

    logger.tracef(format_args!("foo{}", "bar"));
    logger.debugf(format_args!("foo{}", "bar"));
    logger.infof(format_args!("foo{}", "bar"));
    logger.noticef(format_args!("foo{}", "bar"));
    logger.warnf(format_args!("foo{}", "bar"));
    logger.errorf(format_args!("foo{}", "bar"));

    assert_eq!(
        buf.levels(),
        ["debug", "debug", "info", "warn", "warn", "error"]
    );
    assert!(buf.messages().iter().all(|msg| msg == "foobar"));
}

#[test]
fn test_context_levels() {
    let plain = SharedBuf::default();
    let scoped = SharedBuf::default();
    let logger = Logger::new([with_output(plain.clone())]);
    let ctx_logger = Logger::new([with_output(scoped.clone())]);
    let ctx = Context::background();

    logger.tracef(format_args!("foo{}", "bar"));
    logger.infof(format_args!("foo{}", "bar"));
    logger.noticef(format_args!("foo{}", "bar"));
    logger.errorf(format_args!("foo{}", "bar"));

    ctx_logger.ctx_tracef(&ctx, format_args!("foo{}", "bar"));
    ctx_logger.ctx_infof(&ctx, format_args!("foo{}", "bar"));
    ctx_logger.ctx_noticef(&ctx, format_args!("foo{}", "bar"));
    ctx_logger.ctx_errorf(&ctx, format_args!("foo{}", "bar"));

    assert_eq!(plain.contents(), scoped.contents());
    assert!(ctx.logger().is_none());
}

#[test]
fn test_context_logger_is_replaced() {
    let other = SharedBuf::default();
    let buf = SharedBuf::default();
    let ctx =
        engine::Logger::new(Writer::new(other.clone())).with_context(&Context::background());

    let logger = Logger::new([with_output(buf.clone())]);
    logger.ctx_warnf(&ctx, format_args!("routed"));

    assert_eq!(other.contents(), "");
    assert_eq!(buf.messages(), ["routed"]);
}

#[test]
fn test_disabled_logger_emits_nothing() {
    let logger = Logger::from_logger(engine::Logger::disabled(), []);
    let ctx = Context::background();

    logger.ctx_errorf(&ctx, format_args!("dropped"));
    logger.error(&"dropped");

    assert_eq!(logger.level(), engine::Level::Disabled);
    assert!(ctx.logger().is_none());
}

#[test]
fn test_set_level() {
    let buf = SharedBuf::default();
    let mut logger = Logger::new([with_output(buf.clone())]);

    logger.set_level(hlog::Level::INFO);
    logger.debugf(format_args!("hidden"));
    logger.infof(format_args!("shown"));

    assert_eq!(logger.level(), engine::Level::Info);
    assert_eq!(logger.logger().level(), engine::Level::Info);
    assert_eq!(buf.messages(), ["shown"]);

    logger.set_level(hlog::Level::NOTICE);
    logger.infof(format_args!("hidden"));
    logger.noticef(format_args!("shown"));

    assert_eq!(logger.level(), engine::Level::Warn);
    assert_eq!(buf.messages(), ["shown", "shown"]);
}

#[test]
fn test_set_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let file = fs::File::create(&path).unwrap();

    let buf = SharedBuf::default();
    let mut logger = Logger::new([with_output(buf.clone())]);
    logger.set_output(Box::new(file));
    logger.info(&"to file");

    assert_eq!(buf.contents(), "");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\"level\":\"info\",\"message\":\"to file\"}\n"
    );
}

#[test]
fn test_unknown_level_logs_at_warn() {
    let buf = SharedBuf::default();
    let logger = Logger::new([with_output(buf.clone())]);

    logger.log(hlog::Level::from_raw(42), &"plain");
    logger.logf(hlog::Level::from_raw(42), format_args!("formatted"));
    logger.ctx_logf(
        hlog::Level::from_raw(42),
        &Context::background(),
        format_args!("scoped"),
    );

    assert_eq!(buf.levels(), ["warn", "warn", "warn"]);
    assert_eq!(buf.messages(), ["plain", "formatted", "scoped"]);
}

#[test]
fn test_full_logger_object() {
    let buf = SharedBuf::default();
    let mut logger: Box<dyn hlog::FullLogger> =
        Box::new(Logger::new([with_output(buf.clone())]));

    logger.set_level(hlog::Level::WARN);
    logger.infof(format_args!("hidden"));
    logger.warn(&"shown");

    assert_eq!(buf.contents(), "{\"level\":\"warn\",\"message\":\"shown\"}\n");
}
