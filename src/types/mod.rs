//! Core configuration types
//!
//! Run configuration, command line arguments, and validation.

pub mod config;

pub use config::*;
