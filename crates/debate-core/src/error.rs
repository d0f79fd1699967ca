//! Error types for the debate engine

use thiserror::Error;

use crate::session::SessionId;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The evidence table file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The evidence table is not valid JSON for the expected schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table declares no categories at all
    #[error("Evidence table is empty")]
    EmptyTable,

    /// Two categories share the same id
    #[error("Duplicate evidence category: {0}")]
    DuplicateCategory(String),

    /// A category was declared with weight 0
    #[error("Evidence category '{0}' must have a positive weight")]
    ZeroWeight(String),

    /// A category has no keywords and could never match
    #[error("Evidence category '{0}' declares no keywords")]
    NoKeywords(String),

    /// A blank keyword would match every argument
    #[error("Evidence category '{0}' contains an empty keyword")]
    EmptyKeyword(String),

    /// A category has nothing to answer with
    #[error("Evidence category '{0}' has an empty rebuttal pool")]
    NoRebuttals(String),

    /// An environment variable holds a value that cannot be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: String, value: String },
}

/// Errors raised by classifier and session operations
#[derive(Debug, Error)]
pub enum DebateError {
    /// A category id that the evidence table does not contain
    #[error("Unknown evidence category: {0}")]
    UnknownCategory(String),

    /// No session is registered under this id
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
