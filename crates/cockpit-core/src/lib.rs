//! Transcript analysis, alerts and rendering for the Cockpit status line.

mod alerts;
mod command;
mod config_counts;
mod cost;
mod error;
mod git;
pub mod render;
mod transcript;
mod usage_api;

pub use alerts::check_alerts;
pub use command::{EXTRA_CMD_TIMEOUT, run_capture, run_extra_command};
pub use config_counts::count_configs;
pub use cost::{ModelPricing, estimate_cost, format_cost, model_pricing};
pub use error::{CockpitError, UsageErrorCode};
pub use git::git_status;
pub use render::{GlyphSupport, RenderContext, Theme, Tier, render};
pub use transcript::{
    AGENT_TOOL, SKILL_TOOL, TODO_TOOL, TranscriptStateBuilder, build_state, load_transcript,
};
pub use usage_api::{
    SESSION_KEY_ENV, USAGE_API_URL, USAGE_TIMEOUT, fetch_usage, parse_response, request_usage,
};

/// Result type for Cockpit operations.
pub type Result<T> = std::result::Result<T, CockpitError>;
