//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the ports take borrowed ids and the
//! balancer needs to inspect stored state after a run, which a plain
//! in-memory store makes straightforward.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
