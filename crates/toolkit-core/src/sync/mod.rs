//! One synchronization pass and the operations that act on its result
//!
//! - **fanout**: render documents per destination and write them
//! - **orphans**: find managed destination files the pass did not produce
//! - **promote**: copy local-only documents into the shared root
//! - **ssot**: compare the local tree with the shared root
//! - **writeback**: apply a caller's decision about a reported item
//! - **engine**: run the steps above in order

mod engine;
mod fanout;
mod orphans;
mod promote;
mod report;
mod ssot;
mod writeback;

pub use engine::{SyncEngine, SyncOptions};
pub use fanout::FanOutWriter;
pub use orphans::detect_orphans;
pub use promote::{AutoPromoter, promote_file};
pub use report::{
    Direction, DivergenceRecord, OrphanCandidate, SharedOrphan, SkippedPair, SyncRunResult,
};
pub use ssot::{ModifiedTimeRecency, Recency, RecencyStrategy, SsotReconciler};
pub use writeback::{Resolution, apply_divergence, remove_orphan, remove_shared_orphan};
