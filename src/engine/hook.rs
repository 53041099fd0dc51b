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

use jiff::Zoned;

use crate::engine::Event;
use crate::engine::Level;
use crate::time::time_field_format;

/// A hook runs on every emitted event, after the event's own fields and before encoding.
///
/// It receives the event's resolved level and rendered message, and may add fields to the
/// event or discard it. Hooks never run for events below the logger's level.
pub trait Hook: fmt::Debug + Send + Sync + 'static {
    /// Run the hook on an event about to be written.
    fn run(&self, event: &mut Event<'_>, level: Level, message: &str);
}

/// A [`Hook`] implemented by a closure.
///
/// # Examples
///
/// ```
/// use logforth_hlog::engine::HookFn;
///
/// let hook = HookFn::new(|_, level, message| eprintln!("{level}: {message}"));
/// ```
pub struct HookFn<F> {
    f: F,
}

impl<F> fmt::Debug for HookFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HookFn {{ ... }}")
    }
}

impl<F> HookFn<F>
where
    F: Fn(&mut Event<'_>, Level, &str) + Send + Sync + 'static,
{
    /// Wrap a closure as a hook.
    pub fn new(f: F) -> Self {
        HookFn { f }
    }
}

impl<F> Hook for HookFn<F>
where
    F: Fn(&mut Event<'_>, Level, &str) + Send + Sync + 'static,
{
    fn run(&self, event: &mut Event<'_>, level: Level, message: &str) {
        (self.f)(event, level, message)
    }
}

/// Adds the `time` field in the process-wide [`TimeFormat`](crate::TimeFormat).
///
/// A format that fails to render is trapped and replaced by the UTC RFC 3339 timestamp.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TimestampHook;

impl Hook for TimestampHook {
    fn run(&self, event: &mut Event<'_>, _: Level, _: &str) {
        let now = Zoned::now();
        let value = match time_field_format().format(&now) {
            Ok(value) => value,
            Err(err) => {
                event.trap(&err);
                now.timestamp().to_string().into()
            }
        };
        event.insert("time", value);
    }
}

/// Adds the `caller` field as `file:line` of the logging call site, or of the event's
/// explicit [`source`](Event::source).
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct CallerHook;

impl Hook for CallerHook {
    fn run(&self, event: &mut Event<'_>, _: Level, _: &str) {
        let (file, line) = event.caller();
        let caller = format!("{file}:{line}");
        event.insert("caller", caller);
    }
}
