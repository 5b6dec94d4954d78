// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Bridge configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_GAME_OBJECT;

/// Static configuration for the engine bridge, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Name of the engine-side game object that receives bridge messages.
    pub game_object: String,
    /// Verbose logging of dispatch no-ops when the engine is absent.
    pub debug: bool,
    /// Upper bound on how long a readiness wait may block, in milliseconds.
    /// `None` blocks forever, which matches the historical behavior: a
    /// consumer that waits before the engine ever signals hangs permanently.
    pub readiness_timeout_ms: Option<u64>,
}

impl BridgeConfig {
    pub fn readiness_timeout(&self) -> Option<Duration> {
        self.readiness_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            game_object: DEFAULT_GAME_OBJECT.to_string(),
            debug: false,
            readiness_timeout_ms: None,
        }
    }
}
