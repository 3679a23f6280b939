#![doc(test(attr(deny(warnings))))]

//! Flowcast Core projects planned recurring income and expenses into dated
//! cash-flow events, monthly category balances, and summary statistics.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod solver;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init(config: Option<&config::SolverConfig>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(config.and_then(|cfg| cfg.log_filter.as_deref()));
        tracing::info!("Flowcast Core tracing initialized.");
    });
}
