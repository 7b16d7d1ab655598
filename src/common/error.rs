//! Error types for the hierarchy dump tool
//!
//! One variant per failure point in the session flow, so callers can
//! tell a refused session apart from a dead one.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hierarchy dump tool
#[derive(Error, Debug)]
pub enum Error {
    // === Path Resolution Errors ===
    #[error("Failed to resolve the application bundle path: {0}")]
    PathResolution(String),

    // === Session Errors ===
    #[error("Failed to start session: {0}")]
    SessionStart(String),

    #[error("No session is open")]
    SessionNotOpen,

    #[error("Failed to fetch UI hierarchy: {0}")]
    HierarchyFetch(String),

    #[error("Failed to close session: {0}")]
    SessionClose(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
