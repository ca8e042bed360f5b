//! Filesystem primitives for ai-toolkit
//!
//! Provides forward-slash normalized paths, atomic writes, marker-aware
//! reads and removals, and format-agnostic config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ToolkitPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
