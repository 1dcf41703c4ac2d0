//! Builders that turn a working directory into stored objects
//!
//! - `tree_builder`: snapshot a directory into blobs and trees
//! - `commit_builder`: wrap a tree address into a commit object

pub mod commit_builder;
pub mod tree_builder;
