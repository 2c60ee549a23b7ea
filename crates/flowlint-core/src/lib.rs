//! Workflow document model, loading, and configuration for flowlint.
//!
//! - [`workflow`] — Read-only [`Workflow`](workflow::Workflow) view with defaulted field access
//! - [`loader`] — Loading workflow JSON files and classifying load failures
//! - [`config`] — Configuration loading from `flowlint.json`

pub mod config;
pub mod loader;
pub mod workflow;

pub use workflow::Workflow;
