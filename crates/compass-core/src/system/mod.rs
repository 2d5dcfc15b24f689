//! # System Module
//!
//! Progress assessment for a journey.
//!
//! The assessment logic is pure and derived entirely from the journey's
//! catalog and progress; it never mutates anything.

mod stage;

pub use stage::*;
