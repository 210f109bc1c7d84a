//! Shared types for the Cockpit status line.

mod alert;
mod config;
mod git;
mod session;
mod transcript;
mod usage;

pub use alert::*;
pub use config::*;
pub use git::*;
pub use session::*;
pub use transcript::*;
pub use usage::*;
