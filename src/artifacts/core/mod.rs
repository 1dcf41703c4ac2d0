//! Core utilities and shared types
//!
//! This module contains the error types shared by every layer of the store.

pub mod error;

pub use error::{StoreError, StoreResult};
