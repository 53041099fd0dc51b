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

//! Mapping between framework levels and engine levels.

use crate::engine;
use crate::hlog;

// Notice has no engine counterpart and collapses into Warn, so the reverse table has no
// Notice entry.
const HLOG_TO_ENGINE: [(hlog::Level, engine::Level); 7] = [
    (hlog::Level::TRACE, engine::Level::Trace),
    (hlog::Level::DEBUG, engine::Level::Debug),
    (hlog::Level::INFO, engine::Level::Info),
    (hlog::Level::WARN, engine::Level::Warn),
    (hlog::Level::NOTICE, engine::Level::Warn),
    (hlog::Level::ERROR, engine::Level::Error),
    (hlog::Level::FATAL, engine::Level::Fatal),
];

const ENGINE_TO_HLOG: [(engine::Level, hlog::Level); 6] = [
    (engine::Level::Trace, hlog::Level::TRACE),
    (engine::Level::Debug, hlog::Level::DEBUG),
    (engine::Level::Info, hlog::Level::INFO),
    (engine::Level::Warn, hlog::Level::WARN),
    (engine::Level::Error, hlog::Level::ERROR),
    (engine::Level::Fatal, hlog::Level::FATAL),
];

/// Map a framework level to the engine level, defaulting to [`engine::Level::Warn`].
///
/// # Examples
///
/// ```
/// use logforth_hlog::engine;
/// use logforth_hlog::hlog;
/// use logforth_hlog::to_engine_level;
///
/// assert_eq!(to_engine_level(hlog::Level::NOTICE), engine::Level::Warn);
/// assert_eq!(to_engine_level(hlog::Level::from_raw(42)), engine::Level::Warn);
/// ```
pub fn to_engine_level(level: hlog::Level) -> engine::Level {
    HLOG_TO_ENGINE
        .iter()
        .find(|(from, _)| *from == level)
        .map_or(engine::Level::Warn, |(_, to)| *to)
}

/// Map an engine level to the framework level, defaulting to [`hlog::Level::WARN`].
pub fn to_hlog_level(level: engine::Level) -> hlog::Level {
    ENGINE_TO_HLOG
        .iter()
        .find(|(from, _)| *from == level)
        .map_or(hlog::Level::WARN, |(_, to)| *to)
}

impl From<hlog::Level> for engine::Level {
    fn from(level: hlog::Level) -> Self {
        to_engine_level(level)
    }
}

impl From<engine::Level> for hlog::Level {
    fn from(level: engine::Level) -> Self {
        to_hlog_level(level)
    }
}
