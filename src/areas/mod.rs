//! Core repository components
//!
//! This module contains the on-disk areas of a repository:
//!
//! - `database`: Object database for storing blobs, trees, and commits
//! - `repository`: Owns the areas and the command output writer
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod repository;
pub mod workspace;
