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

//! Destinations for encoded log events.

use std::fmt;

use crate::Error;
use crate::engine::Level;

mod stdio;
mod writer;

pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::writer::Writer;

/// A destination for encoded log events.
///
/// Each call receives one complete JSON line, newline included, together with the level of
/// the event it encodes. Implementations serialise their own writes.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Write one encoded event.
    fn append(&self, level: Level, line: &[u8]) -> Result<(), Error>;

    /// Flush any buffered events.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}
