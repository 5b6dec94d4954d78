// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Enginelink Contributors
//
// Unified error types for Enginelink.

use thiserror::Error;

/// Top-level error type for all Enginelink operations.
#[derive(Debug, Error)]
pub enum EnginelinkError {
    // -- Engine dispatch --
    #[error("engine dispatch failed: {0}")]
    Dispatch(String),

    // -- Deep links --
    #[error("route registration failed: {0}")]
    RouteRegistration(String),

    // -- Rewards --
    #[error("reward lookup failed: {0}")]
    RewardLookup(String),

    // -- Social posts --
    #[error("social post failed: {0}")]
    SocialPost(String),

    // -- Serialization --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, EnginelinkError>;
