// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Message forwarder — the one-way door from native services to the engine.
//
// The forwarder is constructed exactly once at startup with either a real
// sink or none at all.  Every failure past that point is caught here and
// logged; platform lifecycle callbacks upstream of this module must never
// observe an error or a panic.

use std::sync::Arc;

use tracing::{debug, error};

use enginelink_core::config::BridgeConfig;
use enginelink_core::types::EngineMethod;

use crate::sink::MessageSink;

/// Delivers messages to the engine-side game object, if an engine is there.
pub struct Forwarder {
    sink: Option<Arc<dyn MessageSink>>,
    game_object: String,
    debug: bool,
}

impl Forwarder {
    /// Build a forwarder over a resolved sink, or over nothing when the
    /// engine entry point is absent.  Resolution happens before this call;
    /// the forwarder never probes again.
    pub fn new(sink: Option<Arc<dyn MessageSink>>, config: &BridgeConfig) -> Self {
        match &sink {
            Some(s) => debug!(sink = s.name(), game_object = %config.game_object, "engine sink attached"),
            None => debug!("no engine sink, all forwards will be dropped"),
        }
        Self {
            sink,
            game_object: config.game_object.clone(),
            debug: config.debug,
        }
    }

    /// Whether a real engine sink is attached.
    pub fn is_available(&self) -> bool {
        self.sink.is_some()
    }

    /// The game object handle every forward targets.
    pub fn game_object(&self) -> &str {
        &self.game_object
    }

    /// Deliver `payload` to the engine under the given method.
    ///
    /// A missing engine and a failing sink are both non-events for the
    /// caller: the former is silent (debug-logged when configured), the
    /// latter is logged at error level and swallowed.
    pub fn forward(&self, method: EngineMethod, payload: &str) {
        let Some(sink) = &self.sink else {
            if self.debug {
                debug!(%method, "engine unavailable, dropping message");
            }
            return;
        };

        if let Err(e) = sink.send(&self.game_object, method.as_str(), payload) {
            error!(%method, error = %e, "engine dispatch failed");
        }
    }
}
