//! Target registry
//!
//! The built-in catalogue lives in [`builtins`]; [`TargetRegistry`]
//! indexes it by id.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_targets};
pub use store::TargetRegistry;
pub use types::{FileNaming, FrontmatterStyle, TargetDefinition, TargetDirectories};
