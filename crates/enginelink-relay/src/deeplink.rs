// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Deep link route registrar.
//
// Routes are registered with the SDK's external router; on a match the
// router invokes our handler with the resolved parameters and we relay
// `{route, parameters}` to the engine.  Registration happens during host
// initialization, so every failure here is logged and swallowed — a broken
// route must not take the process down.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use enginelink_bridge::Forwarder;
use enginelink_core::error::Result;
use enginelink_core::payload::EventPayload;
use enginelink_core::types::{EngineMethod, ParamMap, RouteSpec};

/// Callback the router invokes with resolved path/query parameters.
pub type RouteHandler = Box<dyn Fn(&ParamMap) + Send + Sync>;

/// External deep link router collaborator.  Opaque: pattern syntax, match
/// precedence, and parameter extraction all belong to the SDK proper.
pub trait DeepLinkRouter: Send + Sync {
    fn register_route(&self, spec: &RouteSpec, handler: RouteHandler) -> Result<()>;
}

/// Registers engine-requested routes and relays matches to the engine.
pub struct RouteRegistrar {
    router: Arc<dyn DeepLinkRouter>,
    forwarder: Arc<Forwarder>,
}

impl RouteRegistrar {
    pub fn new(router: Arc<dyn DeepLinkRouter>, forwarder: Arc<Forwarder>) -> Self {
        Self { router, forwarder }
    }

    /// Register a route pattern on the engine's behalf.
    ///
    /// The installed handler forwards `{"route": <pattern>, "parameters":
    /// {...}}` under `DeepLink` on every match.  Both registration failure
    /// and forwarding failure are terminal for this call only.
    pub fn register_route(&self, route: &str, name: &str, description: &str) {
        let spec = RouteSpec::new(route, name, description);
        let forwarder = Arc::clone(&self.forwarder);
        let pattern = route.to_string();

        let handler: RouteHandler = Box::new(move |parameters: &ParamMap| {
            let mut payload = EventPayload::new();
            payload.insert("route", pattern.clone());
            payload.insert("parameters", Value::Object(parameters.clone()));
            forwarder.forward(EngineMethod::DeepLink, &payload.to_wire());
        });

        match self.router.register_route(&spec, handler) {
            Ok(()) => debug!(route, name, "deep link route registered"),
            Err(e) => error!(route, error = %e, "deep link route registration failed"),
        }
    }
}
