//! Types for the session snapshot Claude Code pipes to a status line command.
//!
//! Every field is optional: Claude Code omits blocks that are not known yet
//! (no usage before the first API call, no cost before the first turn).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Context window token usage information.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ContextWindow {
    /// Context window size for current model (e.g., 200000)
    #[serde(default, alias = "contextWindowSize")]
    pub context_window_size: Option<u64>,
    /// Token usage from last API call (null if no messages yet)
    #[serde(default, alias = "currentUsage")]
    pub current_usage: Option<CurrentUsage>,
    /// Precomputed used percentage, preferred over raw counts when present
    #[serde(default, alias = "usedPercentage")]
    pub used_percentage: Option<f64>,
    #[serde(default, alias = "remainingPercentage")]
    pub remaining_percentage: Option<f64>,
}

/// Token usage from the last API call.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CurrentUsage {
    /// Input tokens for current context
    #[serde(default, alias = "inputTokens")]
    pub input_tokens: u64,
    /// Output tokens generated
    #[serde(default, alias = "outputTokens")]
    pub output_tokens: u64,
    /// Tokens written to cache
    #[serde(default, alias = "cacheCreationInputTokens")]
    pub cache_creation_input_tokens: u64,
    /// Tokens read from cache
    #[serde(default, alias = "cacheReadInputTokens")]
    pub cache_read_input_tokens: u64,
}

impl CurrentUsage {
    /// All tokens occupying the context window.
    pub fn total(&self) -> u64 {
        self.input_tokens
            + self.cache_creation_input_tokens
            + self.cache_read_input_tokens
            + self.output_tokens
    }
}

/// Model information.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ModelInfo {
    /// Model ID (e.g., "claude-sonnet-4-20250514")
    #[serde(default, alias = "modelId")]
    pub id: Option<String>,
    /// Display name (e.g., "Sonnet 4")
    #[serde(default, alias = "displayName")]
    pub display_name: Option<String>,
}

/// Workspace information.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub current_dir: Option<String>,
    #[serde(default)]
    pub project_dir: Option<String>,
}

/// Cumulative cost and timing for the session.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CostSummary {
    #[serde(default)]
    pub total_cost_usd: Option<f64>,
    #[serde(default)]
    pub total_duration_ms: Option<u64>,
    #[serde(default)]
    pub total_api_duration_ms: Option<u64>,
    #[serde(default)]
    pub total_lines_added: Option<u64>,
    #[serde(default)]
    pub total_lines_removed: Option<u64>,
}

/// One status line invocation's view of the session.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub hook_event_name: Option<String>,

    /// Path to the JSONL transcript file
    #[serde(default, alias = "transcriptPath")]
    pub transcript_path: Option<PathBuf>,

    #[serde(default)]
    pub cwd: Option<String>,

    #[serde(default)]
    pub workspace: Option<WorkspaceInfo>,

    #[serde(default)]
    pub model: Option<ModelInfo>,

    #[serde(default, alias = "contextWindow")]
    pub context_window: Option<ContextWindow>,

    #[serde(default)]
    pub cost: Option<CostSummary>,

    #[serde(default)]
    pub session_id: Option<String>,

    /// Claude Code version (e.g., "2.0.76")
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub plan_name: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl SessionSnapshot {
    /// Display name of the model, or "Unknown".
    pub fn model_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| non_empty(m.display_name.as_ref()))
            .unwrap_or("Unknown")
    }

    /// Model identifier, falling back to the display name.
    pub fn model_id(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| non_empty(m.id.as_ref()))
            .unwrap_or_else(|| self.model_name())
    }

    /// Percentage of the context window in use.
    ///
    /// A precomputed `used_percentage` wins; otherwise the percentage is derived
    /// from the raw token counts. Returns `None` when neither is available.
    pub fn context_percent(&self) -> Option<f64> {
        let window = self.context_window.as_ref()?;
        if let Some(percent) = window.used_percentage {
            return Some(percent);
        }
        let size = window.context_window_size.filter(|s| *s > 0)?;
        let usage = window.current_usage.as_ref()?;
        Some(usage.total() as f64 / size as f64 * 100.0)
    }

    /// Tokens currently occupying the context window.
    pub fn context_tokens(&self) -> Option<u64> {
        self.context_window
            .as_ref()
            .and_then(|w| w.current_usage.as_ref())
            .map(CurrentUsage::total)
    }

    pub fn context_window_size(&self) -> Option<u64> {
        self.context_window
            .as_ref()
            .and_then(|w| w.context_window_size)
            .filter(|s| *s > 0)
    }

    /// Working directory: `cwd`, then workspace current dir, then project dir.
    pub fn cwd(&self) -> Option<&str> {
        non_empty(self.cwd.as_ref()).or_else(|| {
            let workspace = self.workspace.as_ref()?;
            non_empty(workspace.current_dir.as_ref())
                .or_else(|| non_empty(workspace.project_dir.as_ref()))
        })
    }

    pub fn duration_ms(&self) -> u64 {
        self.cost
            .as_ref()
            .and_then(|c| c.total_duration_ms)
            .unwrap_or(0)
    }

    pub fn total_cost_usd(&self) -> Option<f64> {
        self.cost.as_ref().and_then(|c| c.total_cost_usd)
    }
}
