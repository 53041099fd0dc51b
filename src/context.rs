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

use crate::engine::Logger;

/// A request-scoped context passed to the context-scoped logging methods.
///
/// A context may carry an engine [`Logger`]; attach one with [`Logger::with_context`] and
/// resolve it with [`Logger::from_context`]. Contexts are immutable: attaching a logger
/// returns a new context.
#[derive(Debug, Clone, Default)]
pub struct Context {
    logger: Option<Logger>,
}

impl Context {
    /// An empty context.
    pub fn background() -> Context {
        Context::default()
    }

    /// The logger attached to this context, if any.
    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    pub(crate) fn with_logger(&self, logger: Logger) -> Context {
        let mut ctx = self.clone();
        ctx.logger = Some(logger);
        ctx
    }
}
