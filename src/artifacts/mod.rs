//! Data structures and algorithms
//!
//! - `builders`: Tree and commit construction from the working directory
//! - `core`: Shared error types
//! - `objects`: Object types (blob, tree, commit) and their codecs

pub mod builders;
pub mod core;
pub mod objects;
