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

//! The structured logger behind the [`hlog`](crate::hlog) facade.
//!
//! The engine follows the leveled event-builder model: a [`Logger`] carries a minimum
//! level, a destination, context fields and hooks; each logging call starts an [`Event`],
//! which is encoded by the [`JsonLayout`](crate::layout::JsonLayout) and handed to an
//! [`Append`](crate::append::Append) when finished.
//!
//! ```
//! use logforth_hlog::append::Stdout;
//! use logforth_hlog::engine::Logger;
//!
//! let logger = Logger::new(Stdout::default());
//! logger.info().field("user", "alice").msg("signed in");
//! // {"level":"info","user":"alice","message":"signed in"}
//! ```

mod builder;
mod event;
mod hook;
mod level;
mod logger;
mod record;

pub use self::builder::ContextBuilder;
pub use self::event::Event;
pub use self::hook::Hook;
pub use self::hook::HookFn;
pub use self::level::Level;
pub use self::logger::Logger;
pub use self::record::Field;
pub use self::record::Record;
pub use self::record::Value;
