//! HTTP middleware for request processing and protection.
//!
//! Provides cache hardening, rate limiting, and observability middleware.

pub mod cache_control;
pub mod rate_limit;
pub mod tracing;
