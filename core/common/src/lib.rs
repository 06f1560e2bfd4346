//! Common types shared across urlseal crates.
//!
//! This crate provides the error type used throughout the codebase,
//! ensuring consistent error reporting across modules.

pub mod error;

pub use error::{Error, Result};
