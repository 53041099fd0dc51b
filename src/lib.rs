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

//! A structured JSON logging backend for the hlog web framework.
//!
//! [`Logger`] implements [`hlog::FullLogger`], the interface the framework calls, by
//! forwarding every call to a leveled event of the structured [`engine::Logger`]. Each event
//! is written as one JSON object per line:
//!
//! ```json
//! {"level":"info","service":"logging","message":"foobar"}
//! ```
//!
//! # Examples
//!
//! Configure the logger with options, applied in order:
//!
//! ```
//! use logforth_hlog::Logger;
//! use logforth_hlog::hlog;
//! use logforth_hlog::hlog::FormatLogger;
//! use logforth_hlog::with_caller;
//! use logforth_hlog::with_field;
//! use logforth_hlog::with_level;
//! use logforth_hlog::with_timestamp;
//!
//! let logger = Logger::new([
//!     with_field("service", "logging"),
//!     with_timestamp(),
//!     with_caller(),
//!     with_level(hlog::Level::INFO),
//! ]);
//!
//! logger.debugf(format_args!("suppressed"));
//! logger.infof(format_args!("listening on {}", "0.0.0.0:8080"));
//! ```
//!
//! Adopt an existing engine logger:
//!
//! ```
//! use logforth_hlog::Logger;
//! use logforth_hlog::append::Stderr;
//! use logforth_hlog::engine;
//! use logforth_hlog::hlog::Logger as _;
//!
//! let base = engine::Logger::new(Stderr::default())
//!     .with()
//!     .field("component", "router")
//!     .logger();
//! let logger = Logger::from_logger(base, []);
//! logger.warn(&"route table is empty");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
#[cfg(feature = "bridge-log")]
pub mod bridge;
pub mod config;
pub mod engine;
pub mod hlog;
pub mod layout;

mod context;
mod error;
mod level;
mod logger;
mod options;
mod time;
mod trap;

pub use self::context::Context;
pub use self::error::Error;
pub use self::level::to_engine_level;
pub use self::level::to_hlog_level;
pub use self::logger::Logger;
pub use self::options::Opt;
pub use self::options::with_append;
pub use self::options::with_caller;
pub use self::options::with_field;
pub use self::options::with_fields;
pub use self::options::with_formatted_timestamp;
pub use self::options::with_hook;
pub use self::options::with_hook_fn;
pub use self::options::with_level;
pub use self::options::with_output;
pub use self::options::with_timestamp;
pub use self::options::with_trap;
pub use self::time::TimeFormat;
pub use self::time::set_time_field_format;
pub use self::time::time_field_format;
pub use self::trap::DefaultTrap;
pub use self::trap::Trap;
