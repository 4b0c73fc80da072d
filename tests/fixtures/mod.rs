//! Test fixtures for campus-nav.
//!
//! Provides realistic sample data: event documents shaped like the
//! upstream store and provider route steps with marked-up instructions.

pub mod campus_samples;

pub use campus_samples::*;
