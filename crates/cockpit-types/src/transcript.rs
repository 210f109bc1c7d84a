//! Transcript JSONL entries and the state reconstructed from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of Claude's transcript JSONL.
///
/// Only the fields the state builder consumes are modelled; everything else
/// (`type`, `uuid`, `parentUuid`, ...) is ignored.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct TranscriptEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub message: Option<TranscriptMessage>,
}

/// Message wrapper carrying the content blocks.
///
/// `content` stays a raw [`Value`] so a single malformed block can be skipped
/// without losing its siblings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct TranscriptMessage {
    #[serde(default)]
    pub content: Value,
}

/// Content block in a transcript message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        #[serde(default)]
        content: Value,
        #[serde(default)]
        is_error: bool,
    },
    /// Thinking, images and anything newer.
    #[serde(other)]
    Unknown,
}

/// Lifecycle status shared by tools, agents and skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationStatus {
    Running,
    Completed,
    Error,
}

impl InvocationStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, InvocationStatus::Running)
    }

    /// Terminal status for a result carrying the given error flag.
    pub fn from_result(is_error: bool) -> Self {
        if is_error {
            InvocationStatus::Error
        } else {
            InvocationStatus::Completed
        }
    }
}

/// Model family a sub-agent prompt mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Opus,
    Sonnet,
    Haiku,
}

impl ModelFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelFamily::Opus => "opus",
            ModelFamily::Sonnet => "sonnet",
            ModelFamily::Haiku => "haiku",
        }
    }

    /// Case-insensitive keyword search; opus, then sonnet, then haiku.
    pub fn detect(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        [ModelFamily::Opus, ModelFamily::Sonnet, ModelFamily::Haiku]
            .into_iter()
            .find(|family| lower.contains(family.as_str()))
    }
}

/// A generic tool call (Read, Bash, Grep, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub id: String,
    pub name: String,
    /// File path, command or pattern, for the tools that have one
    pub target: Option<String>,
    pub status: InvocationStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

/// A sub-agent spawned through the Task tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInvocation {
    pub id: String,
    pub subagent_type: String,
    /// Inferred from the prompt text, not authoritative
    pub model_hint: Option<ModelFamily>,
    pub description: Option<String>,
    pub status: InvocationStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

/// A skill invoked through the Skill tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillInvocation {
    pub id: String,
    pub name: String,
    pub args: Option<String>,
    pub status: InvocationStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub content: String,
    pub status: TodoStatus,
    #[serde(default, alias = "activeForm", skip_serializing_if = "Option::is_none")]
    pub active_form: Option<String>,
}

/// Everything the status line knows about in-flight and recent work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptState {
    /// Most recently started first
    pub tools: Vec<ToolInvocation>,
    /// Most recently started first
    pub agents: Vec<AgentInvocation>,
    /// In the order the todo tool last wrote them
    pub todos: Vec<TodoItem>,
    /// Most recently started first
    pub skills: Vec<SkillInvocation>,
}

impl TranscriptState {
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
            && self.agents.is_empty()
            && self.todos.is_empty()
            && self.skills.is_empty()
    }

    pub fn completed_todos(&self) -> usize {
        self.todos
            .iter()
            .filter(|t| t.status == TodoStatus::Completed)
            .count()
    }

    /// The todo currently being worked on, if any.
    pub fn current_todo(&self) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.status == TodoStatus::InProgress)
    }
}
