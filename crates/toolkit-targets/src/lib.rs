//! Destination catalogue for ai-toolkit.
//!
//! Every editor or agent that receives synchronized content is described
//! by a plain [`TargetDefinition`] record: which directory each content
//! [`Category`] lands in, how output files are named, and which header
//! block (if any) skills receive. Behaviour never varies beyond those
//! fields, so targets are data rather than trait objects.
//!
//! [`TargetRegistry::with_builtins`] is the lookup point for the CLI and
//! the sync engine.

pub mod category;
pub mod error;
pub mod registry;

pub use category::Category;
pub use error::{Error, Result};
pub use registry::{
    BUILTIN_COUNT, FileNaming, FrontmatterStyle, TargetDefinition, TargetDirectories,
    TargetRegistry, builtin_targets,
};
