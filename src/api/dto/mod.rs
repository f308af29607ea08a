//! Request and response payloads for the HTTP surface.

pub mod health;
pub mod shorten;
pub mod stats;
pub mod urls;
