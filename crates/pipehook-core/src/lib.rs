//! pipehook-core - Core library for the pipehook plugin
//!
//! This crate provides the shared functionality between the pipehook daemon
//! and the pipehook CLI:
//!
//! - **catalog**: the immutable hook registry and task synthesizer
//! - **schema**: variable schema documents advertised by discovery
//! - **tekton**: the Tekton task document emitted by builds
//! - **types**: hook metadata and the build result envelope

pub mod catalog;
pub mod error;
pub mod schema;
pub mod tekton;
pub mod types;

// Re-export commonly used types
pub use catalog::{HookCatalog, HookSpec, VarOverride};
pub use error::{Error, Result};
pub use schema::{VariableSchema, VariableSpec};
pub use types::{Hook, HookMetadata, ResourceRequest};
