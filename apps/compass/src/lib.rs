//! # Compass Application Library
//!
//! The pieces of the `compass` binary, exposed for integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;

pub use error::AppError;
