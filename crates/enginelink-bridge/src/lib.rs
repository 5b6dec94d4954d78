// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Enginelink — Engine boundary abstractions.
//
// This crate defines the seam between native-side services and the game
// engine's inbound message entry point.  Historically that entry point was
// resolved by reflection at process start; here it is an explicit capability
// (`MessageSink`) injected at construction, with a null implementation
// standing in when the engine is absent (editor builds, unit tests, server
// tooling).

pub mod forwarder;
pub mod null;
pub mod recording;
pub mod sink;

pub use forwarder::Forwarder;
pub use null::NullSink;
pub use recording::{RecordingSink, SentMessage};
pub use sink::MessageSink;
