//! Command implementations
//!
//! Commands are organized into two categories following git's architecture:
//!
//! - `plumbing`: Low-level commands for direct object manipulation
//! - `porcelain`: Repository setup
//!
//! Each command is an `impl Repository` block writing to the repository's writer.

pub mod plumbing;
pub mod porcelain;
