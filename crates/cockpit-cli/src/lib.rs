//! Cockpit status line binary support: configuration, logging, terminal
//! detection and the per-invocation driver. Separated from main.rs so the
//! driver can be exercised from integration tests.

pub mod app;
pub mod config;
pub mod logging;
pub mod output;
pub mod terminal;
