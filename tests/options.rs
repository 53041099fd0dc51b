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

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use common::SharedBuf;
use logforth_hlog::Error;
use logforth_hlog::Logger;
use logforth_hlog::Trap;
use logforth_hlog::config::Config;
use logforth_hlog::engine::Event;
use logforth_hlog::engine::Hook;
use logforth_hlog::engine::Level;
use logforth_hlog::engine::Value;
use logforth_hlog::hlog;
use logforth_hlog::hlog::FormatLogger;
use logforth_hlog::hlog::Logger as _;
use logforth_hlog::with_caller;
use logforth_hlog::with_field;
use logforth_hlog::with_fields;
use logforth_hlog::with_hook;
use logforth_hlog::with_hook_fn;
use logforth_hlog::with_level;
use logforth_hlog::with_output;
use logforth_hlog::with_timestamp;
use logforth_hlog::with_trap;

#[test]
fn test_with_caller() {
    let buf = SharedBuf::default();
    let logger = Logger::new([with_output(buf.clone()), with_caller()]);

    let line = line!() + 1;
    logger.info(&"here");

    let caller = buf.lines()[0]["caller"].as_str().unwrap().to_string();
    assert_eq!(caller, format!("{}:{line}", file!()));

    let (file, _) = caller.rsplit_once(':').unwrap();
    assert_eq!(
        Path::new(file).file_name().and_then(|name| name.to_str()),
        Some("options.rs")
    );
}

#[test]
fn test_with_field() {
    let buf = SharedBuf::default();
    let logger = Logger::new([
        with_output(buf.clone()),
        with_field("service", "logging"),
        with_field("retries", 3),
    ]);

    logger.info(&"foo");

    assert_eq!(
        buf.contents(),
        "{\"level\":\"info\",\"service\":\"logging\",\"retries\":3,\"message\":\"foo\"}\n"
    );
}

#[test]
fn test_with_fields_sorted() {
    let buf = SharedBuf::default();
    let logger = Logger::new([
        with_output(buf.clone()),
        with_fields([
            ("port", Value::from(8080)),
            ("host", Value::from("localhost")),
        ]),
    ]);

    logger.infof(format_args!("listening"));

    insta::assert_snapshot!(
        buf.contents().trim_end(),
        @r#"{"level":"info","host":"localhost","port":8080,"message":"listening"}"#
    );
}

#[test]
fn test_duplicate_fields_pass_through() {
    let buf = SharedBuf::default();
    let logger = Logger::new([
        with_output(buf.clone()),
        with_field("key", "a"),
        with_field("key", "b"),
    ]);

    logger.info(&"dup");

    assert_eq!(
        buf.contents(),
        "{\"level\":\"info\",\"key\":\"a\",\"key\":\"b\",\"message\":\"dup\"}\n"
    );
}

#[test]
fn test_with_hook_fn() {
    let buf = SharedBuf::default();
    let seen = Arc::new(Mutex::new(vec![]));
    let logger = Logger::new([
        with_output(buf.clone()),
        with_hook_fn({
            let seen = seen.clone();
            move |event: &mut Event<'_>, level: Level, msg: &str| {
                seen.lock().unwrap().push((level, msg.to_string()));
                event.insert("hooked", true);
            }
        }),
        with_level(hlog::Level::INFO),
    ]);

    logger.debugf(format_args!("skipped"));
    logger.infof(format_args!("first"));
    logger.errorf(format_args!("second"));

    assert_eq!(
        *seen.lock().unwrap(),
        [
            (Level::Info, "first".to_string()),
            (Level::Error, "second".to_string())
        ]
    );
    assert!(buf.lines().iter().all(|line| line["hooked"] == true));
}

#[derive(Debug)]
struct AlertHook;

impl Hook for AlertHook {
    fn run(&self, event: &mut Event<'_>, level: Level, _: &str) {
        if level >= Level::Error {
            event.insert("alert", true);
        }
        if level == Level::Debug {
            event.discard();
        }
    }
}

#[test]
fn test_with_hook() {
    let buf = SharedBuf::default();
    let logger = Logger::new([with_output(buf.clone()), with_hook(AlertHook)]);

    logger.debug(&"discarded");
    logger.info(&"quiet");
    logger.error(&"loud");

    assert_eq!(
        buf.contents(),
        "{\"level\":\"info\",\"message\":\"quiet\"}\n\
         {\"level\":\"error\",\"alert\":true,\"message\":\"loud\"}\n"
    );
}

#[test]
fn test_with_level_last_wins() {
    let buf = SharedBuf::default();
    let logger = Logger::new([
        with_output(buf.clone()),
        with_level(hlog::Level::ERROR),
        with_level(hlog::Level::DEBUG),
    ]);

    logger.debugf(format_args!("kept"));

    assert_eq!(logger.level(), Level::Debug);
    assert_eq!(buf.messages(), ["kept"]);
}

#[test]
fn test_with_timestamp() {
    let buf = SharedBuf::default();
    let logger = Logger::new([with_output(buf.clone()), with_timestamp()]);

    logger.info(&"now");

    let line = &buf.lines()[0];
    let time = line["time"].as_str().unwrap();
    time.parse::<jiff::Timestamp>().unwrap();
    assert_eq!(line["message"], "now");
}

#[test]
fn test_options_apply_in_order() {
    let first = SharedBuf::default();
    let second = SharedBuf::default();
    let logger = Logger::new([
        with_output(first.clone()),
        with_field("before", 1),
        with_output(second.clone()),
        with_field("after", 2),
    ]);

    logger.info(&"foo");

    assert_eq!(first.contents(), "");
    assert_eq!(
        second.contents(),
        "{\"level\":\"info\",\"before\":1,\"after\":2,\"message\":\"foo\"}\n"
    );
}

#[derive(Debug)]
struct Failing;

impl io::Write for Failing {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
struct Collect(Arc<Mutex<Vec<String>>>);

impl Trap for Collect {
    fn trap(&self, err: &Error) {
        self.0.lock().unwrap().push(err.to_string());
    }
}

#[test]
fn test_with_trap() {
    let trap = Collect::default();
    let logger = Logger::new([with_output(Failing), with_trap(trap.clone())]);

    logger.warn(&"lost");

    let errors = trap.0.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("failed to write log event"));
    assert!(errors[0].contains("disk full"));
}

#[test]
fn test_config_matches_options() {
    let from_config = SharedBuf::default();
    let from_opts = SharedBuf::default();

    let config =
        Config::from_json(r#"{"level": "warn", "fields": {"service": "billing", "port": 8080}}"#)
            .unwrap();
    let mut opts = config.into_options();
    opts.push(with_output(from_config.clone()));
    let configured = Logger::new(opts);

    let built = Logger::new([
        with_fields([
            ("service", Value::from("billing")),
            ("port", Value::from(8080)),
        ]),
        with_level(hlog::Level::WARN),
        with_output(from_opts.clone()),
    ]);

    for logger in [&configured, &built] {
        logger.infof(format_args!("skipped"));
        logger.warnf(format_args!("kept"));
    }

    assert_eq!(from_config.contents(), from_opts.contents());
    assert_eq!(
        from_config.contents(),
        "{\"level\":\"warn\",\"port\":8080,\"service\":\"billing\",\"message\":\"kept\"}\n"
    );
}

#[test]
fn test_config_rejects_unknown_keys() {
    let err = Config::from_json(r#"{"colour": true}"#).unwrap_err();
    assert_eq!(err.message(), "failed to parse logger config");
}
