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

//! Fatal calls end the process, so each one runs in a child process re-running this test
//! binary with `FATAL_CALL` and `FATAL_LOG` set.

use std::env;
use std::fs;
use std::process::Command;

use logforth_hlog::Context;
use logforth_hlog::Logger;
use logforth_hlog::hlog::CtxLogger;
use logforth_hlog::hlog::FormatLogger;
use logforth_hlog::hlog::Logger as _;
use logforth_hlog::with_output;

const CALL: &str = "FATAL_CALL";
const LOG: &str = "FATAL_LOG";

fn run_fatal_call(call: &str, path: &str) {
    let file = fs::File::create(path).unwrap();
    let logger = Logger::new([with_output(file)]);
    match call {
        "plain" => logger.fatal(&"shutting down"),
        "formatted" => logger.fatalf(format_args!("shutting {}", "down")),
        "ctx" => {
            let ctx = Context::background();
            logger.ctx_fatalf(&ctx, format_args!("shutting {}", "down"))
        }
        call => panic!("unknown fatal call: {call}"),
    }
    unreachable!("a fatal call returned");
}

#[test]
fn test_fatal_exits_after_writing() {
    if let (Ok(call), Ok(path)) = (env::var(CALL), env::var(LOG)) {
        run_fatal_call(&call, &path);
    }

    let dir = tempfile::tempdir().unwrap();
    for call in ["plain", "formatted", "ctx"] {
        let path = dir.path().join(format!("{call}.log"));
        let status = Command::new(env::current_exe().unwrap())
            .args(["test_fatal_exits_after_writing", "--exact", "--nocapture"])
            .env(CALL, call)
            .env(LOG, &path)
            .status()
            .unwrap();

        assert_eq!(status.code(), Some(1), "{call}");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\"level\":\"fatal\",\"message\":\"shutting down\"}\n",
            "{call}"
        );
    }
}
