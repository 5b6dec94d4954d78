// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Enginelink demo harness.
//
// Wires the relay services to a recording sink standing in for the engine,
// then drives one scripted session: readiness handshake, route registration
// and match, notification launch with reward resolution, a social share
// round trip, and a QA event replay.  Prints the full engine-bound traffic
// at the end.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::{json, Value};
use tracing::info;

use enginelink_bridge::{Forwarder, MessageSink, RecordingSink};
use enginelink_core::config::BridgeConfig;
use enginelink_core::error::Result;
use enginelink_core::types::{actions, BroadcastEvent, ParamMap, RouteSpec};
use enginelink_relay::{
    DeepLinkRouter, EventReceiver, QaReporter, ReadinessGate, RewardLookup, RouteHandler,
    RouteRegistrar, SocialPostBridge, SocialPostKind,
};

/// Minimal in-process router: stores registrations, dispatches by exact
/// pattern match.  Real pattern matching lives in the SDK proper.
#[derive(Default)]
struct SimRouter {
    routes: Mutex<Vec<(RouteSpec, RouteHandler)>>,
}

impl SimRouter {
    fn dispatch(&self, route: &str, parameters: ParamMap) {
        for (spec, handler) in self.routes.lock().expect("router lock poisoned").iter() {
            if spec.route == route {
                handler(&parameters);
            }
        }
    }
}

impl DeepLinkRouter for SimRouter {
    fn register_route(&self, spec: &RouteSpec, handler: RouteHandler) -> Result<()> {
        self.routes
            .lock()
            .expect("router lock poisoned")
            .push((spec.clone(), handler));
        Ok(())
    }
}

/// Canned reward backend.
struct SimRewards;

impl RewardLookup for SimRewards {
    fn reward_by_id(&self, reward_id: &str) -> Result<Option<Value>> {
        Ok(Some(json!({"id": reward_id, "coins": 500})))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("enginelink demo starting");

    let engine = Arc::new(RecordingSink::new());
    let config = BridgeConfig::default();
    let forwarder = Arc::new(Forwarder::new(
        Some(engine.clone() as Arc<dyn MessageSink>),
        &config,
    ));

    // Readiness handshake: a consumer blocks until the "engine" signals.
    let gate = Arc::new(ReadinessGate::new());
    let waiter = {
        let gate = Arc::clone(&gate);
        let timeout = config.readiness_timeout();
        thread::spawn(move || {
            match timeout {
                Some(t) => {
                    if !gate.wait_timeout(t) {
                        info!("engine never signaled readiness within the timeout");
                        return;
                    }
                }
                None => gate.wait(),
            }
            info!("deep link delivery unblocked");
        })
    };
    thread::sleep(Duration::from_millis(20));
    gate.signal();
    waiter.join().expect("gate waiter panicked");

    // Deep link registration and a simulated match.
    let router = Arc::new(SimRouter::default());
    let registrar = RouteRegistrar::new(router.clone(), Arc::clone(&forwarder));
    registrar.register_route("/store/:sku", "Store", "Open a store item");
    let mut params = ParamMap::new();
    params.insert("sku".into(), json!("gems_large"));
    router.dispatch("/store/:sku", params);

    // Notification launch with background reward resolution.
    let receiver =
        EventReceiver::new(Arc::clone(&forwarder)).with_reward_lookup(Arc::new(SimRewards));
    receiver.on_receive(
        &BroadcastEvent::new(actions::LAUNCHED_FROM_NOTIFICATION)
            .with_extra("teakRewardId", "reward-1")
            .with_extra("teakScheduleName", "daily"),
    );
    // The reward worker is fire-and-forget; give it a beat to land.
    thread::sleep(Duration::from_millis(100));

    // Social share round trip.
    let social = SocialPostBridge::new(Arc::clone(&forwarder));
    let mut properties = ParamMap::new();
    properties.insert("caption".into(), json!("Look what I won!"));
    let id = social.initiate(
        SocialPostKind::ShareDialog,
        "win_screen",
        properties,
        Box::new(|response| info!(%response, "share completed")),
    );
    social.resolve(&id.to_string(), r#"{"post_id": "123_456"}"#);

    // QA identify + event + replay.
    let qa = QaReporter::new(Arc::clone(&forwarder));
    qa.identify_client("demo-client");
    qa.report_event("notification", "shown", None);
    qa.send_event_backlog();

    println!("--- engine-bound traffic ---");
    for message in engine.sent() {
        println!("{} <- {}: {}", message.target, message.method, message.payload);
    }
}
