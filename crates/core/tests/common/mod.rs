//! Common test utilities shared by the accessor integration tests.
//!
//! - Test fixtures (sample stages, documents, accessors)
//! - Custom assertions over accessor lookups

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
