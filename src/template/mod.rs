//! Project materialization for genst
//!
//! This module contains the core generation components:
//! - `store`: The embedded, read-only template store
//! - `operation`: Describes the filesystem actions taken during generation
//! - `materializer`: Renders templates and writes the project tree to disk

pub mod materializer;
pub mod operation;
pub mod store;

pub use materializer::{MaterializeReport, Materializer};
pub use store::TemplateStore;
