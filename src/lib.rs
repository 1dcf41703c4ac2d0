//! A minimal content-addressed object store using the git object model
//!
//! Objects (blobs, trees, commits) are addressed by the SHA-1 of their framed
//! content and stored zlib-compressed under `.git/objects`.

pub mod areas;
pub mod artifacts;
pub mod commands;
