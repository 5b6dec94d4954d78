// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Event receiver — translates process-local platform broadcasts into engine
// messages.
//
// Two actions matter: notification launch and reward claim attempt.  A
// launch must ALWAYS produce a `NotificationLaunch` callback, even when
// payload construction fails, because the engine-side UI waits on it.  A
// reward claim with no reward object is silently dropped (duplicate
// filtering inherited from the platform SDK).

use std::sync::Arc;
use std::thread;

use serde_json::Value;
use tracing::{debug, error, warn};

use enginelink_bridge::Forwarder;
use enginelink_core::error::Result;
use enginelink_core::payload::EventPayload;
use enginelink_core::types::{actions, BroadcastEvent, EngineMethod, EMPTY_PAYLOAD};

/// Reward lookup collaborator — resolves a reward id to the full reward
/// object.  May block; the receiver only ever calls it off the delivering
/// thread.  `Ok(None)` means the id is unknown or already consumed.
pub trait RewardLookup: Send + Sync {
    fn reward_by_id(&self, reward_id: &str) -> Result<Option<Value>>;
}

/// Receives platform broadcasts and forwards them to the engine.
pub struct EventReceiver {
    forwarder: Arc<Forwarder>,
    reward_lookup: Option<Arc<dyn RewardLookup>>,
}

impl EventReceiver {
    pub fn new(forwarder: Arc<Forwarder>) -> Self {
        Self {
            forwarder,
            reward_lookup: None,
        }
    }

    /// Attach a reward lookup.  Launch events carrying a reward id will then
    /// be enriched with the resolved reward object before forwarding.
    pub fn with_reward_lookup(mut self, lookup: Arc<dyn RewardLookup>) -> Self {
        self.reward_lookup = Some(lookup);
        self
    }

    /// Broadcast delivery entry point.  Never returns an error and never
    /// panics; platform lifecycle callbacks cannot tolerate either.
    pub fn on_receive(&self, event: &BroadcastEvent) {
        match event.action.as_str() {
            actions::LAUNCHED_FROM_NOTIFICATION => self.on_notification_launch(event),
            actions::REWARD_CLAIM_ATTEMPT => self.on_reward_claim_attempt(event),
            other => debug!(action = other, "ignoring unrelated broadcast"),
        }
    }

    fn on_notification_launch(&self, event: &BroadcastEvent) {
        let payload = launch_payload(event);
        let reward_id = event.extras.get("teakRewardId").cloned();

        match (reward_id, &self.reward_lookup) {
            (Some(id), Some(lookup)) => {
                // Resolve the reward off this thread, then forward the
                // enriched payload.  Fire-and-forget: no cancellation, no
                // join.  Exactly one NotificationLaunch goes out either way.
                let forwarder = Arc::clone(&self.forwarder);
                let lookup = Arc::clone(lookup);
                thread::spawn(move || {
                    let enriched = match lookup.reward_by_id(&id) {
                        Ok(Some(reward)) => {
                            let mut p = payload;
                            p.insert("teakReward", reward);
                            p.to_wire()
                        }
                        Ok(None) => {
                            debug!(reward_id = %id, "reward id did not resolve");
                            payload.to_wire()
                        }
                        Err(e) => {
                            error!(reward_id = %id, error = %e, "reward lookup failed");
                            payload.to_wire()
                        }
                    };
                    forwarder.forward(EngineMethod::NotificationLaunch, &enriched);
                });
            }
            _ => {
                self.forwarder
                    .forward(EngineMethod::NotificationLaunch, &payload.to_wire());
            }
        }
    }

    fn on_reward_claim_attempt(&self, event: &BroadcastEvent) {
        let Some(reward) = &event.reward else {
            // Null reward: drop without signaling the engine.  Duplicate
            // claim broadcasts arrive with the reward already consumed.
            debug!("reward claim attempt with no reward object, dropping");
            return;
        };

        match serde_json::to_string(reward) {
            Ok(json) => self.forwarder.forward(EngineMethod::RewardClaimAttempt, &json),
            Err(e) => {
                warn!(error = %e, "reward object serialization failed");
                self.forwarder
                    .forward(EngineMethod::RewardClaimAttempt, EMPTY_PAYLOAD);
            }
        }
    }
}

/// Build the notification launch payload from intent extras.
///
/// `incentivized` is true iff a reward id is present; the optional metadata
/// keys are added only when the platform delivered them.
fn launch_payload(event: &BroadcastEvent) -> EventPayload {
    let mut payload = EventPayload::new();
    let reward_id = event.extras.get("teakRewardId");

    payload.insert("incentivized", reward_id.is_some());
    payload.insert_opt("teakRewardId", reward_id.map(String::as_str));
    payload.insert_opt(
        "teakScheduleName",
        event.extras.get("teakScheduleName").map(String::as_str),
    );
    payload.insert_opt(
        "teakCreativeName",
        event.extras.get("teakCreativeName").map(String::as_str),
    );
    payload.insert_opt(
        "teakDeepLink",
        event.extras.get("teakDeepLink").map(String::as_str),
    );

    payload
}
