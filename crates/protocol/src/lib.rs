//! # sk-protocol
//!
//! Data models for the bundled pipeline configuration document.
//!
//! This crate defines the shared structures describing a multi-stage
//! text-generation pipeline: stages, generation settings, and the
//! model-serving endpoint.
//!
//! ## Modules
//!
//! - [`pipeline_models`]: The pipeline document and its parts
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and ts-rs
//! - TypeScript generation: All types derive `TS` so the front-end that ships
//!   the JSON document can share them (written to `bindings/` by `cargo test`)
//! - Independent compilation: No dependencies on other stage-kit crates

pub mod pipeline_models;

pub use pipeline_models::*;
