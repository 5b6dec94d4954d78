// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Core domain types for the Enginelink engine bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Name of the in-engine game object that receives every bridge message.
///
/// This string is part of the wire contract with the engine side and must
/// match the game object spawned by the engine integration exactly.
pub const DEFAULT_GAME_OBJECT: &str = "TeakGameObject";

/// Payload sent when nothing better could be produced.  The engine side
/// treats an empty JSON object as "launched, no metadata".
pub const EMPTY_PAYLOAD: &str = "{}";

/// Broadcast action names delivered by the host platform.
pub mod actions {
    /// The app was brought to the foreground by tapping a push notification.
    pub const LAUNCHED_FROM_NOTIFICATION: &str =
        "io.teak.sdk.Teak.intent.LAUNCHED_FROM_NOTIFICATION";

    /// The SDK attempted to claim a reward attached to a notification.
    pub const REWARD_CLAIM_ATTEMPT: &str = "io.teak.sdk.Teak.intent.REWARD_CLAIM_ATTEMPT";
}

/// Fixed method names on the engine-side game object.
///
/// Each variant maps to exactly one handler method the engine integration
/// script exposes.  The strings are wire constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineMethod {
    /// App launched (or foregrounded) from a push notification.
    NotificationLaunch,
    /// A reward claim was attempted; payload is the reward object.
    RewardClaimAttempt,
    /// A registered deep link route matched.
    DeepLink,
    /// Remote QA tooling event.
    RemoteQaEvent,
    /// Completion callback for an engine-driven feed post dialog.
    PopupFeedPostCallback,
    /// Request the engine show the platform share dialog.
    ShowFacebookShareDialog,
    /// Request the engine make an Open Graph feed post.
    MakeGraphFeedPost,
}

impl EngineMethod {
    /// The exact method name as the engine expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotificationLaunch => "NotificationLaunch",
            Self::RewardClaimAttempt => "RewardClaimAttempt",
            Self::DeepLink => "DeepLink",
            Self::RemoteQaEvent => "RemoteQAEvent",
            Self::PopupFeedPostCallback => "PopupFeedPostCallback",
            Self::ShowFacebookShareDialog => "ShowFacebookShareDialog",
            Self::MakeGraphFeedPost => "MakeGraphFeedPost",
        }
    }
}

impl std::fmt::Display for EngineMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Correlation identifier for an outstanding engine round trip.
///
/// Generated fresh per request; the engine echoes it back verbatim when it
/// completes the corresponding dialog or post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(pub Uuid);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id echoed back by the engine.  Returns `None` for anything
    /// that is not a UUID the bridge could have handed out.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved path and query parameters of a matched deep link route.
pub type ParamMap = serde_json::Map<String, Value>;

/// A named deep link route pattern offered to the external router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Route pattern, e.g. `/store/:sku`.
    pub route: String,
    /// Human-readable display name shown in dashboard tooling.
    pub name: String,
    /// Longer description shown in dashboard tooling.
    pub description: String,
}

impl RouteSpec {
    pub fn new(
        route: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A process-local broadcast event delivered by the host platform.
///
/// Mirrors the shape of a platform intent: an action name, flat string
/// extras, and an optional structured reward object (the one extra the
/// platform delivers as a serialized value rather than a string).
#[derive(Debug, Clone, Default)]
pub struct BroadcastEvent {
    /// Broadcast action, one of the constants in [`actions`].
    pub action: String,
    /// Flat string-keyed extras.
    pub extras: std::collections::HashMap<String, String>,
    /// Structured reward object, present only on reward claim attempts.
    pub reward: Option<Value>,
}

impl BroadcastEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    /// Builder-style extra insertion, used heavily in tests.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn with_reward(mut self, reward: Value) -> Self {
        self.reward = Some(reward);
        self
    }
}
