//! Project configuration (`ai-toolkit.yaml`)
//!
//! Only the keys the sync engine consumes are modelled; everything else in
//! the file belongs to other tooling and is ignored on load.

mod manifest;
mod source;

pub use manifest::{EditorSetting, ToolkitConfig};
pub use source::ContentSource;
