//! Error types for toolkit-targets

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown target: {id}")]
    UnknownTarget { id: String },

    #[error("Unknown content category: {name}")]
    UnknownCategory { name: String },
}
