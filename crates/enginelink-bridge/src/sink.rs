// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// The engine's inbound message entry point, as an explicit capability.

use enginelink_core::error::Result;

/// Delivery surface for messages crossing into the game engine.
///
/// Implementations wrap whatever transport the host actually has: the
/// engine's own send-message entry point in production, a recording sink in
/// tests, or nothing at all on engine-less builds.
///
/// `send` takes the target game object handle, the handler method name, and
/// the JSON-encoded payload text, mirroring the engine's
/// `(gameObject, method, message)` calling convention.
pub trait MessageSink: Send + Sync {
    fn send(&self, target: &str, method: &str, payload: &str) -> Result<()>;

    /// Human-readable sink name for logs (e.g. "unity-player", "recording").
    fn name(&self) -> &str;
}
