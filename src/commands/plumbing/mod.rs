//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `cat-file`: Print an object's content, type or size
//! - `commit-tree`: Create a commit object for a tree
//! - `hash-object`: Compute object ID and optionally store in database
//! - `ls-tree`: List contents of a tree object
//! - `write-tree`: Snapshot the working directory into tree objects

pub mod cat_file;
pub mod commit_tree;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
