// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Enginelink — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod payload;
pub mod types;

pub use config::BridgeConfig;
pub use error::EnginelinkError;
pub use payload::EventPayload;
pub use types::*;
