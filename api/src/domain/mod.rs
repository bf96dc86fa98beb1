//! Domain layer
//!
//! Records of a group project and the interfaces used to load and update them.
//! - `entities`: Domain models for members, tasks, check-ins and peer reviews
//! - `ports`: Trait definitions for the persistence collaborator

pub mod entities;
pub mod ports;
