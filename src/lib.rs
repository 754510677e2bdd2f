#![doc(test(attr(deny(warnings))))]

//! PlanR Core offers the ledger, aggregation, and insight primitives that power
//! the PlanR budgeting app's presentation layer.
//!
//! The crate is the computation side of the app: the presentation layer issues
//! commands through [`core::ledger_manager::LedgerManager`] and reads derived
//! view-models back. Every derived value is recomputed from current ledger
//! state on demand; nothing is cached between reads.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod seed;
pub mod storage;
pub mod time;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("planr_core=info".parse().expect("static directive"));
        fmt().with_env_filter(filter).init();
        tracing::info!("PlanR Core tracing initialized.");
    });
}
