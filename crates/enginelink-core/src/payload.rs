// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Event payload construction.
//
// Every message crossing the engine boundary is a flat, ordered mapping from
// string key to JSON value, serialized to text.  Keys are inserted
// conditionally based on presence of optional fields, and insertion order is
// preserved on the wire (serde_json's `preserve_order` feature).

use serde_json::Value;

use crate::types::EMPTY_PAYLOAD;

/// An ordered, string-keyed event payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPayload {
    map: serde_json::Map<String, Value>,
}

impl EventPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key unconditionally.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// Insert a key only when the value is present.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<Value>>) -> &mut Self {
        if let Some(v) = value {
            self.map.insert(key.into(), v.into());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Serialize for the wire.  Serialization of a string-keyed map cannot
    /// realistically fail, but the boundary contract is "always deliver
    /// something", so any failure degrades to the empty payload.
    pub fn to_wire(&self) -> String {
        serde_json::to_string(&self.map).unwrap_or_else(|e| {
            tracing::error!(error = %e, "payload serialization failed, sending empty payload");
            EMPTY_PAYLOAD.to_string()
        })
    }
}

impl From<serde_json::Map<String, Value>> for EventPayload {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self { map }
    }
}

impl From<EventPayload> for Value {
    fn from(payload: EventPayload) -> Self {
        Value::Object(payload.map)
    }
}
