// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Recording sink — captures every message for later assertion.
//
// Used by the test suites of the relay services and by the demo app as the
// "simulated engine".

use std::sync::Mutex;

use enginelink_core::error::Result;

use crate::sink::MessageSink;

/// One captured `(target, method, payload)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub target: String,
    pub method: String,
    pub payload: String,
}

/// Sink that appends every send to an in-memory log.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far, in order.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().expect("recording sink lock poisoned").clone()
    }

    /// Drain the log, returning the captured messages.
    pub fn take(&self) -> Vec<SentMessage> {
        std::mem::take(&mut *self.sent.lock().expect("recording sink lock poisoned"))
    }
}

impl MessageSink for RecordingSink {
    fn send(&self, target: &str, method: &str, payload: &str) -> Result<()> {
        self.sent
            .lock()
            .expect("recording sink lock poisoned")
            .push(SentMessage {
                target: target.to_string(),
                method: method.to_string(),
                payload: payload.to_string(),
            });
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_in_order() {
        let sink = RecordingSink::new();
        sink.send("TeakGameObject", "DeepLink", "{\"route\":\"/a\"}").unwrap();
        sink.send("TeakGameObject", "NotificationLaunch", "{}").unwrap();

        let sent = sink.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, "DeepLink");
        assert_eq!(sent[1].method, "NotificationLaunch");
    }

    #[test]
    fn take_drains_the_log() {
        let sink = RecordingSink::new();
        sink.send("TeakGameObject", "RemoteQAEvent", "{}").unwrap();
        assert_eq!(sink.take().len(), 1);
        assert!(sink.sent().is_empty());
    }
}
