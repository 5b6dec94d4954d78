// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Social post bridge.
//
// Sharing flows are asymmetric: the native side initiates, the engine (or a
// directly-registered platform interface) shows the dialog, and completion
// arrives later as a string callback keyed by correlation id.  Entries in
// the pending map have no expiry; if the engine never calls back the
// callback leaks for the life of the process.  That is accepted — there is
// no way to distinguish "slow dialog" from "never coming".

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, warn};

use enginelink_bridge::Forwarder;
use enginelink_core::error::Result;
use enginelink_core::payload::EventPayload;
use enginelink_core::types::{CorrelationId, EngineMethod, ParamMap};

/// Completion handler for a social post request.  Receives the decoded
/// platform response (`Value::Null` when the response was undecodable).
pub type SocialCallback = Box<dyn FnOnce(Value) + Send>;

/// The two sharing flows the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPostKind {
    /// Native share dialog.
    ShareDialog,
    /// Open Graph feed post.
    GraphFeedPost,
}

impl SocialPostKind {
    fn method(self) -> EngineMethod {
        match self {
            Self::ShareDialog => EngineMethod::ShowFacebookShareDialog,
            Self::GraphFeedPost => EngineMethod::MakeGraphFeedPost,
        }
    }
}

/// Host-side social platform capability.
///
/// When an SDK embedder has the platform SDK linked natively it registers
/// one of these and the bridge routes initiate calls straight to it,
/// skipping JSON serialization and the engine round trip.  Completion still
/// flows through [`SocialPostBridge::resolve`] with the handed-out id.
pub trait SocialInterface: Send + Sync {
    fn show_share_dialog(
        &self,
        target_id: &str,
        properties: &ParamMap,
        callback_id: CorrelationId,
    ) -> Result<()>;

    fn make_graph_feed_post(
        &self,
        target_id: &str,
        properties: &ParamMap,
        callback_id: CorrelationId,
    ) -> Result<()>;
}

/// Tracks outstanding social post requests and resolves their callbacks.
pub struct SocialPostBridge {
    forwarder: Arc<Forwarder>,
    pending: Mutex<HashMap<CorrelationId, SocialCallback>>,
    direct: Mutex<Option<Arc<dyn SocialInterface>>>,
}

impl SocialPostBridge {
    pub fn new(forwarder: Arc<Forwarder>) -> Self {
        Self {
            forwarder,
            pending: Mutex::new(HashMap::new()),
            direct: Mutex::new(None),
        }
    }

    /// Register a direct platform interface.  Subsequent initiate calls
    /// bypass the engine transport.
    pub fn set_direct_interface(&self, interface: Arc<dyn SocialInterface>) {
        debug!("direct social interface registered");
        *self.direct.lock().expect("social bridge lock poisoned") = Some(interface);
    }

    /// Start a sharing flow.  Returns the correlation id the completion
    /// callback will arrive under.
    pub fn initiate(
        &self,
        kind: SocialPostKind,
        target_id: &str,
        properties: ParamMap,
        callback: SocialCallback,
    ) -> CorrelationId {
        let id = CorrelationId::new();
        self.pending
            .lock()
            .expect("social bridge lock poisoned")
            .insert(id, callback);

        let direct = self
            .direct
            .lock()
            .expect("social bridge lock poisoned")
            .clone();
        if let Some(interface) = direct {
            let outcome = match kind {
                SocialPostKind::ShareDialog => {
                    interface.show_share_dialog(target_id, &properties, id)
                }
                SocialPostKind::GraphFeedPost => {
                    interface.make_graph_feed_post(target_id, &properties, id)
                }
            };
            if let Err(e) = outcome {
                // The entry stays pending: the interface may still complete
                // asynchronously after reporting a presentation error.
                warn!(callback_id = %id, error = %e, "direct social interface call failed");
            }
            return id;
        }

        let mut payload = EventPayload::new();
        payload.insert("objectInstanceId", target_id);
        payload.insert("callbackId", id.to_string());
        payload.insert("objectProperties", Value::Object(properties));
        self.forwarder.forward(kind.method(), &payload.to_wire());

        id
    }

    /// Engine completion entry point (`PopupFeedPostCallback` semantics).
    ///
    /// Looks up and removes the callback stored under `id`, then invokes it
    /// with the decoded response.  Unknown or unparseable ids are silent
    /// no-ops: stale and duplicate completions are expected.
    pub fn resolve(&self, id: &str, response_json: &str) {
        let Some(id) = CorrelationId::parse(id) else {
            debug!(callback_id = id, "unparseable callback id, ignoring");
            return;
        };

        let callback = self
            .pending
            .lock()
            .expect("social bridge lock poisoned")
            .remove(&id);
        let Some(callback) = callback else {
            debug!(callback_id = %id, "no pending callback for id, ignoring");
            return;
        };

        let response = serde_json::from_str(response_json).unwrap_or_else(|e| {
            warn!(callback_id = %id, error = %e, "undecodable social response");
            Value::Null
        });
        callback(response);
    }

    /// Number of requests still awaiting completion.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().expect("social bridge lock poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enginelink_bridge::{MessageSink, RecordingSink};
    use enginelink_core::config::BridgeConfig;
    use enginelink_core::error::EnginelinkError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn wiring() -> (Arc<RecordingSink>, SocialPostBridge) {
        let sink = Arc::new(RecordingSink::new());
        let forwarder = Arc::new(Forwarder::new(
            Some(sink.clone() as Arc<dyn MessageSink>),
            &BridgeConfig::default(),
        ));
        (sink, SocialPostBridge::new(forwarder))
    }

    fn properties() -> ParamMap {
        let mut p = ParamMap::new();
        p.insert("caption".into(), json!("Look what I won!"));
        p
    }

    #[test]
    fn initiate_forwards_payload_with_callback_id() {
        let (sink, bridge) = wiring();

        let id = bridge.initiate(
            SocialPostKind::ShareDialog,
            "win_screen",
            properties(),
            Box::new(|_| {}),
        );

        let sent = sink.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, "ShowFacebookShareDialog");
        let body: Value = serde_json::from_str(&sent[0].payload).unwrap();
        assert_eq!(body["objectInstanceId"], json!("win_screen"));
        assert_eq!(body["callbackId"], json!(id.to_string()));
        assert_eq!(body["objectProperties"]["caption"], json!("Look what I won!"));
        assert_eq!(bridge.pending_count(), 1);
    }

    #[test]
    fn graph_feed_post_uses_its_own_method() {
        let (sink, bridge) = wiring();
        bridge.initiate(
            SocialPostKind::GraphFeedPost,
            "high_score",
            ParamMap::new(),
            Box::new(|_| {}),
        );
        assert_eq!(sink.sent()[0].method, "MakeGraphFeedPost");
    }

    #[test]
    fn resolve_invokes_callback_exactly_once() {
        let (_sink, bridge) = wiring();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_in_cb = Arc::clone(&calls);
        let id = bridge.initiate(
            SocialPostKind::ShareDialog,
            "win_screen",
            ParamMap::new(),
            Box::new(move |response| {
                assert_eq!(response, json!({"post_id": "123_456"}));
                calls_in_cb.fetch_add(1, Ordering::SeqCst);
            }),
        );

        bridge.resolve(&id.to_string(), r#"{"post_id": "123_456"}"#);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(bridge.pending_count(), 0);

        // Duplicate completion is a no-op.
        bridge.resolve(&id.to_string(), r#"{"post_id": "123_456"}"#);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn resolve_unknown_id_is_a_noop() {
        let (_sink, bridge) = wiring();
        bridge.resolve(&CorrelationId::new().to_string(), "{}");
        bridge.resolve("not-a-uuid", "{}");
    }

    #[test]
    fn undecodable_response_still_resolves_with_null() {
        let (_sink, bridge) = wiring();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_in_cb = Arc::clone(&calls);
        let id = bridge.initiate(
            SocialPostKind::GraphFeedPost,
            "high_score",
            ParamMap::new(),
            Box::new(move |response| {
                assert_eq!(response, Value::Null);
                calls_in_cb.fetch_add(1, Ordering::SeqCst);
            }),
        );

        bridge.resolve(&id.to_string(), "not json at all");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn direct_interface_failure_keeps_the_entry_pending() {
        struct FailingShare;
        impl SocialInterface for FailingShare {
            fn show_share_dialog(&self, _: &str, _: &ParamMap, _: CorrelationId) -> Result<()> {
                Err(EnginelinkError::SocialPost("dialog unavailable".into()))
            }
            fn make_graph_feed_post(&self, _: &str, _: &ParamMap, _: CorrelationId) -> Result<()> {
                Ok(())
            }
        }

        let (sink, bridge) = wiring();
        bridge.set_direct_interface(Arc::new(FailingShare));

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_cb = Arc::clone(&calls);
        let id = bridge.initiate(
            SocialPostKind::ShareDialog,
            "win_screen",
            ParamMap::new(),
            Box::new(move |_| {
                calls_in_cb.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(sink.sent().is_empty());
        assert_eq!(bridge.pending_count(), 1);

        // The interface may still complete later; resolve must still fire.
        bridge.resolve(&id.to_string(), r#"{"canceled": true}"#);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn outstanding_ids_are_unique() {
        let (_sink, bridge) = wiring();
        let a = bridge.initiate(
            SocialPostKind::ShareDialog,
            "x",
            ParamMap::new(),
            Box::new(|_| {}),
        );
        let b = bridge.initiate(
            SocialPostKind::ShareDialog,
            "x",
            ParamMap::new(),
            Box::new(|_| {}),
        );
        assert_ne!(a, b);
        assert_eq!(bridge.pending_count(), 2);
    }

    #[test]
    fn direct_interface_bypasses_the_engine() {
        struct DirectShare {
            seen: Mutex<Vec<(String, CorrelationId)>>,
        }
        impl SocialInterface for DirectShare {
            fn show_share_dialog(
                &self,
                target_id: &str,
                _properties: &ParamMap,
                callback_id: CorrelationId,
            ) -> Result<()> {
                self.seen.lock().unwrap().push((target_id.to_string(), callback_id));
                Ok(())
            }
            fn make_graph_feed_post(
                &self,
                _: &str,
                _: &ParamMap,
                _: CorrelationId,
            ) -> Result<()> {
                Ok(())
            }
        }

        let (sink, bridge) = wiring();
        let direct = Arc::new(DirectShare {
            seen: Mutex::new(Vec::new()),
        });
        bridge.set_direct_interface(direct.clone());

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_cb = Arc::clone(&calls);
        let id = bridge.initiate(
            SocialPostKind::ShareDialog,
            "win_screen",
            properties(),
            Box::new(move |_| {
                calls_in_cb.fetch_add(1, Ordering::SeqCst);
            }),
        );

        // Nothing crossed the engine boundary.
        assert!(sink.sent().is_empty());
        let seen = direct.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[("win_screen".to_string(), id)]);
        drop(seen);

        // Completion still flows through resolve with the handed-out id.
        bridge.resolve(&id.to_string(), r#"{"completed": true}"#);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
