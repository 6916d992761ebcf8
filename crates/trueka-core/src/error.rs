use thiserror::Error;

/// Unified error type for the Trueka workspace.
#[derive(Error, Debug)]
pub enum TruekaError {
    // ── Store errors ───────────────────────────────────────────
    #[error("store error: {0}")]
    Store(String),

    // ── Submission errors ──────────────────────────────────────
    #[error("invalid skill entry: {field} must not be empty")]
    InvalidDraft { field: &'static str },

    #[error("unknown skill kind '{0}' (expected offer or seek)")]
    UnknownKind(String),

    #[error("prompt failed: {0}")]
    Prompt(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TruekaError>;
