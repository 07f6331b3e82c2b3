//! KIE DMN server library
//!
//! Provides the REST resource, configuration and the bundled sample
//! deployment for reuse in tests.

pub mod api;
pub mod config;
pub mod deployment;
pub mod error;
