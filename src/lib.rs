#![doc(test(attr(deny(warnings))))]

//! Budget Tracker records income and categorised purchases, reports balances
//! and per-category totals, and persists its state to a flat text file.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let meta = utils::build_info::current();
        tracing::info!(
            version = meta.version,
            git_hash = meta.git_hash,
            built_at = meta.timestamp,
            target = meta.target,
            profile = meta.profile,
            rustc = meta.rustc,
            "Budget Tracker tracing initialized."
        );
    });
}
