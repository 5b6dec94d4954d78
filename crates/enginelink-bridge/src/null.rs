// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Null sink for engine-less builds.
//
// Every send is a logged no-op.  Returning Ok keeps the boundary contract:
// an absent engine must never surface as an error to platform callbacks.

use enginelink_core::error::Result;

use crate::sink::MessageSink;

/// No-op sink used when the engine entry point could not be resolved.
pub struct NullSink;

impl MessageSink for NullSink {
    fn send(&self, target: &str, method: &str, _payload: &str) -> Result<()> {
        tracing::debug!(target_object = target, method, "engine absent, message dropped");
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
