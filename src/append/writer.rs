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
use std::io::Write;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::append::Append;
use crate::engine::Level;

/// An appender over any [`Write`] implementation, such as a file or an in-memory buffer.
///
/// Writes are serialised through a mutex, so one event is never interleaved with another.
///
/// # Examples
///
/// ```
/// use logforth_hlog::append::Writer;
///
/// let appender = Writer::new(std::io::sink());
/// ```
pub struct Writer<W> {
    writer: Mutex<W>,
}

impl<W> fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Writer {{ ... }}")
    }
}

impl<W: Write + Send + 'static> Writer<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Writer {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send + 'static> Append for Writer<W> {
    fn append(&self, _: Level, line: &[u8]) -> Result<(), Error> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush().map_err(Error::from_io_error)
    }
}
