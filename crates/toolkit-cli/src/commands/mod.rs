//! Command implementations for toolkit-cli

pub mod list_targets;
pub mod promote;
pub mod sync;
pub mod sync_all;
pub mod watch;

pub use list_targets::run_list_targets;
pub use promote::run_promote;
pub use sync::run_sync;
pub use sync_all::run_sync_all;
pub use watch::run_watch;
