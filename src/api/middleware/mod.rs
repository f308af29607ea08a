//! HTTP middleware: caller identity, rate limiting, request tracing.

pub mod identity;
pub mod rate_limit;
pub mod tracing;
