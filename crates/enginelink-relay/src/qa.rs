// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Remote QA reporter.
//
// QA tooling identifies the client once, then streams tagged events to the
// engine under `RemoteQAEvent`.  Events are also queued in an in-memory
// backlog so a late-starting or reconnecting engine can request a replay.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use enginelink_bridge::Forwarder;
use enginelink_core::payload::EventPayload;
use enginelink_core::types::{EngineMethod, ParamMap};

#[derive(Default)]
struct QaState {
    client_id: Option<String>,
    client_identifier: Option<String>,
    backlog: VecDeque<String>,
}

/// Forwards remote-QA events to the engine and keeps a replayable backlog.
pub struct QaReporter {
    forwarder: Arc<Forwarder>,
    state: Mutex<QaState>,
}

impl QaReporter {
    pub fn new(forwarder: Arc<Forwarder>) -> Self {
        Self {
            forwarder,
            state: Mutex::new(QaState::default()),
        }
    }

    /// Record this client's identity and cache the identification payload
    /// QA tooling fetches on connect.
    pub fn identify_client(&self, client_id: &str) {
        let mut payload = EventPayload::new();
        payload.insert("type", "identify");
        payload.insert("id", client_id);

        let mut device = ParamMap::new();
        device.insert("platform".into(), Value::from(std::env::consts::OS));
        device.insert("identified_at".into(), Value::from(Utc::now().to_rfc3339()));
        payload.insert("device", Value::Object(device));

        let mut state = self.state.lock().expect("qa reporter lock poisoned");
        state.client_id = Some(client_id.to_string());
        state.client_identifier = Some(payload.to_wire());
    }

    /// The cached identification payload, if `identify_client` has run.
    pub fn client_identifier(&self) -> Option<String> {
        self.state
            .lock()
            .expect("qa reporter lock poisoned")
            .client_identifier
            .clone()
    }

    /// Report a QA event: queue it in the backlog, then forward it.
    /// Forwarding failure never loses the backlog entry.
    pub fn report_event(&self, event_type: &str, name: &str, extras: Option<ParamMap>) {
        let mut payload = EventPayload::new();
        payload.insert("type", event_type);
        payload.insert("name", name);

        let client_id = self
            .state
            .lock()
            .expect("qa reporter lock poisoned")
            .client_id
            .clone();
        payload.insert_opt("id", client_id);
        payload.insert_opt("extras", extras.map(Value::Object));

        let wire = payload.to_wire();
        self.state
            .lock()
            .expect("qa reporter lock poisoned")
            .backlog
            .push_back(wire.clone());

        self.forwarder.forward(EngineMethod::RemoteQaEvent, &wire);
    }

    /// Replay every queued event through the forwarder, oldest first.
    /// The backlog is kept; replay is for engines that (re)connect late.
    pub fn send_event_backlog(&self) {
        let backlog: Vec<String> = self
            .state
            .lock()
            .expect("qa reporter lock poisoned")
            .backlog
            .iter()
            .cloned()
            .collect();

        debug!(count = backlog.len(), "replaying qa event backlog");
        for event in &backlog {
            self.forwarder.forward(EngineMethod::RemoteQaEvent, event);
        }
    }

    pub fn backlog_len(&self) -> usize {
        self.state
            .lock()
            .expect("qa reporter lock poisoned")
            .backlog
            .len()
    }
}
