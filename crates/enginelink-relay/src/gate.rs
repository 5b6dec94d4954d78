// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Readiness gate — a one-shot latch between SDK startup and engine startup.
//
// Deep link delivery elsewhere in the SDK must not race the engine's own
// scene load; consumers block on the gate until the engine's ready hook
// fires.  The gate signals at most once per process lifetime and never
// resets.

use std::sync::{Condvar, Mutex};
use std::time::Duration;

use tracing::debug;

/// One-shot, run-once synchronization signal.
///
/// `wait` with no timeout blocks forever if the engine never signals.  That
/// is the historical contract: an engine-less process that still waits on
/// the gate hangs, by design, rather than delivering deep links into a void.
/// Callers that cannot accept that use [`ReadinessGate::wait_timeout`].
#[derive(Default)]
pub struct ReadinessGate {
    signaled: Mutex<bool>,
    cond: Condvar,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal readiness.  Idempotent; only the first call transitions.
    pub fn signal(&self) {
        let mut signaled = self.signaled.lock().expect("readiness gate lock poisoned");
        if *signaled {
            return;
        }
        *signaled = true;
        debug!("readiness gate signaled");
        self.cond.notify_all();
    }

    /// Block the calling thread until the gate has been signaled.
    /// Returns immediately if it already was.
    pub fn wait(&self) {
        let mut signaled = self.signaled.lock().expect("readiness gate lock poisoned");
        while !*signaled {
            signaled = self
                .cond
                .wait(signaled)
                .expect("readiness gate lock poisoned");
        }
    }

    /// Block until signaled or until `timeout` elapses.
    /// Returns whether the gate was signaled within the window.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let signaled = self.signaled.lock().expect("readiness gate lock poisoned");
        let (signaled, _result) = self
            .cond
            .wait_timeout_while(signaled, timeout, |signaled| !*signaled)
            .expect("readiness gate lock poisoned");
        *signaled
    }

    /// Non-blocking probe.
    pub fn is_signaled(&self) -> bool {
        *self.signaled.lock().expect("readiness gate lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn wait_after_signal_returns_immediately() {
        let gate = ReadinessGate::new();
        gate.signal();
        gate.wait();
        assert!(gate.is_signaled());
    }

    #[test]
    fn signal_is_idempotent() {
        let gate = ReadinessGate::new();
        gate.signal();
        gate.signal();
        gate.signal();
        assert!(gate.is_signaled());
    }

    #[test]
    fn wait_before_signal_unblocks_on_signal() {
        let gate = Arc::new(ReadinessGate::new());
        let waiter = {
            let gate = Arc::clone(&gate);
            thread::spawn(move || {
                gate.wait();
                true
            })
        };

        // Give the waiter a moment to park before signaling.
        thread::sleep(Duration::from_millis(20));
        assert!(!gate.is_signaled());
        gate.signal();

        assert!(waiter.join().expect("waiter panicked"));
    }

    #[test]
    fn wait_timeout_reports_false_when_never_signaled() {
        let gate = ReadinessGate::new();
        assert!(!gate.wait_timeout(Duration::from_millis(30)));
    }

    #[test]
    fn wait_timeout_reports_true_when_signaled() {
        let gate = Arc::new(ReadinessGate::new());
        let signaler = {
            let gate = Arc::clone(&gate);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                gate.signal();
            })
        };

        assert!(gate.wait_timeout(Duration::from_secs(5)));
        signaler.join().expect("signaler panicked");
    }
}
