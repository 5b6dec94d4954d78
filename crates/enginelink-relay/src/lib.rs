// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Enginelink Relay — the services that sit between host platform events and
// the engine-side game object.  Inbound broadcasts are translated to JSON
// payloads and pushed through the forwarder; engine-originated calls (route
// registration, readiness signaling, social callbacks) land on the service
// objects directly.

pub mod deeplink;
pub mod gate;
pub mod qa;
pub mod receiver;
pub mod social;

pub use deeplink::{DeepLinkRouter, RouteHandler, RouteRegistrar};
pub use gate::ReadinessGate;
pub use qa::QaReporter;
pub use receiver::{EventReceiver, RewardLookup};
pub use social::{SocialInterface, SocialPostBridge, SocialPostKind};
