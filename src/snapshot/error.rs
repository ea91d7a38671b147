//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur during snapshot operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Snapshot serialization failed: {0}")]
    Serialize(String),

    /// Deserialization from JSON or binary format failed
    #[error("Snapshot deserialization failed: {0}")]
    Deserialize(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot carries no navigation history to resume from
    #[error("Snapshot history is empty")]
    EmptyHistory,

    /// Snapshot references a screen the flow no longer declares
    #[error("Snapshot references undeclared screen {key}")]
    UnknownScreen { key: String },
}
