//! # sk-core
//!
//! Read-only access to the pipeline configuration bundled with stage-kit.
//!
//! This crate provides:
//! - The embedded `pipeline.config.json` document
//! - Loading of that document into typed models
//! - Lookups by stage position and stage id over a process-wide instance
//!
//! ## Modules
//!
//! - [`config`]: Embedded document, loader, and accessors
//!
//! ## Example
//!
//! ```
//! use sk_core::config;
//!
//! config::init();
//! assert_eq!(config::get_stage_count(), config::get_stages().len());
//! if let Some(first) = config::get_stage_by_index(1) {
//!     assert_eq!(config::get_model_for_stage(1), first.model);
//! }
//! assert!(config::get_stage_by_index(0).is_none());
//! ```

pub mod config;

pub use config::accessor::PipelineConfigAccessor;
pub use config::error::{ConfigError, ConfigResult};
