//! Configuration module for page mirroring
//!
//! This module provides the `MirrorConfig` struct and its builder for
//! tuning fetch timeouts, request identity and response size limits.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::MirrorConfigBuilder;
pub use types::MirrorConfig;
