//! Error types for toolkit-core

use std::path::PathBuf;

/// Result type for toolkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toolkit-core operations
///
/// Failures of a single document or destination during a sync pass are
/// collected into the run result instead; these variants cover whole-run
/// preconditions and the explicit write-back operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `ai-toolkit.yaml` in the project root
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// A path that should name a document is not below a category folder
    #[error("Cannot determine content category of {path} (expected rules/, skills/ or workflows/)")]
    UnknownCategory { path: String },

    /// A document path that climbs out of its root with `..`
    #[error("{path} points outside the content root")]
    PathEscapesRoot { path: String },

    /// Promotion would overwrite an existing shared document
    #[error("{path} already exists in the shared root (use --force to overwrite)")]
    PromoteConflict { path: PathBuf },

    /// Promotion source does not exist
    #[error("Nothing to promote: {path} does not exist")]
    PromoteSourceMissing { path: PathBuf },

    /// An operation needs a shared root but none is configured
    #[error("No shared root configured (add exactly one `type: local` content source)")]
    NoSharedRoot,

    /// Filesystem error from toolkit-fs
    #[error(transparent)]
    Fs(#[from] toolkit_fs::Error),

    /// Registry error from toolkit-targets
    #[error(transparent)]
    Targets(#[from] toolkit_targets::Error),

    /// Configuration text is not valid YAML for the expected model
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
