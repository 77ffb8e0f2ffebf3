//! HTTP middleware for request processing and protection.
//!
//! Provides bearer authentication and request tracing.

pub mod auth;
pub mod tracing;
