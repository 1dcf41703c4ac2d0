//! Error taxonomy of the object store
//!
//! The store, the tree codec and the builders report failures through
//! [`StoreError`]. Command implementations wrap these into `anyhow` errors with
//! additional context before they reach the user.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

/// Errors raised by the object store and its codecs
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The address has no corresponding stored object.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// The stored bytes fail to decompress or carry an invalid frame header.
    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    /// A tree payload cannot be parsed as a complete sequence of records.
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    /// A filesystem operation failed.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid tree entry name: {0:?}")]
    InvalidEntryName(String),

    #[error("invalid entry mode: {0}")]
    InvalidEntryMode(String),

    #[error("invalid object type: {0}")]
    InvalidObjectType(String),

    #[error("malformed commit: {0}")]
    MalformedCommit(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(oid: &ObjectId, reason: impl Into<String>) -> Self {
        StoreError::CorruptObject {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }
}

/// Result alias for object store operations.
pub type StoreResult<T> = Result<T, StoreError>;
