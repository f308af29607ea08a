//! Domain layer: entities, repository traits, and background workers.

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod expiry_worker;
pub mod repositories;
