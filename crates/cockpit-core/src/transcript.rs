//! Transcript state reconstruction.
//!
//! Replays the JSONL transcript Claude Code writes at
//! `~/.claude/projects/<path>/<session>.jsonl` in a single forward pass and
//! tracks which tools, sub-agents and skills were started and how they ended,
//! plus the latest todo list.
//!
//! Tools, agents and skills share one id namespace, so they live in one map
//! keyed by `tool_use_id` with the category carried by [`Invocation`].

use chrono::{DateTime, Utc};
use cockpit_types::{
    AgentInvocation, ContentBlock, InvocationStatus, ModelFamily, SkillInvocation, TodoItem,
    ToolInvocation, TranscriptEntry, TranscriptLimits, TranscriptState,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Tool name that spawns a sub-agent.
pub const AGENT_TOOL: &str = "Task";
/// Tool name that invokes a skill.
pub const SKILL_TOOL: &str = "Skill";
/// Tool name that rewrites the session's todo list.
pub const TODO_TOOL: &str = "TodoWrite";

const DESCRIPTION_FALLBACK_CHARS: usize = 50;

/// A tracked start event, tagged by category.
#[derive(Debug, Clone)]
enum Invocation {
    Tool(ToolInvocation),
    Agent(AgentInvocation),
    Skill(SkillInvocation),
}

impl Invocation {
    fn status(&self) -> InvocationStatus {
        match self {
            Invocation::Tool(t) => t.status,
            Invocation::Agent(a) => a.status,
            Invocation::Skill(s) => s.status,
        }
    }

    /// Move a running invocation to its terminal status.
    fn finalize(&mut self, is_error: bool, error: Option<String>, at: DateTime<Utc>) {
        let (status, end_time, error_slot) = match self {
            Invocation::Tool(t) => (&mut t.status, &mut t.end_time, &mut t.error),
            Invocation::Agent(a) => (&mut a.status, &mut a.end_time, &mut a.error),
            Invocation::Skill(s) => (&mut s.status, &mut s.end_time, &mut s.error),
        };
        *status = InvocationStatus::from_result(is_error);
        *end_time = Some(at);
        if is_error {
            *error_slot = error;
        }
    }
}

#[derive(Debug, Clone)]
struct Tracked {
    /// Encounter order, used to break start-time ties
    seq: usize,
    invocation: Invocation,
}

/// Incremental builder fed one transcript line (or entry) at a time.
#[derive(Debug, Clone)]
pub struct TranscriptStateBuilder {
    limits: TranscriptLimits,
    /// Fallback time for entries without a usable timestamp
    clock: DateTime<Utc>,
    invocations: HashMap<String, Tracked>,
    next_seq: usize,
    todos: Vec<TodoItem>,
}

impl TranscriptStateBuilder {
    pub fn new(limits: TranscriptLimits, clock: DateTime<Utc>) -> Self {
        Self {
            limits,
            clock,
            invocations: HashMap::new(),
            next_seq: 0,
            todos: Vec::new(),
        }
    }

    /// Process a single JSONL line. Blank and unparseable lines are skipped.
    pub fn process_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        match serde_json::from_str::<TranscriptEntry>(line) {
            Ok(entry) => self.process_entry(&entry),
            Err(e) => {
                trace!(
                    target: "cockpit::transcript",
                    "Failed to parse transcript line: {} - {}",
                    e,
                    line.chars().take(100).collect::<String>()
                );
            }
        }
    }

    /// Process every content block of an entry in order.
    pub fn process_entry(&mut self, entry: &TranscriptEntry) {
        let Some(message) = &entry.message else {
            return;
        };
        let Value::Array(blocks) = &message.content else {
            // Plain string content is user/assistant prose
            return;
        };

        let at = parse_timestamp(entry.timestamp.as_deref()).unwrap_or(self.clock);

        for raw in blocks {
            let block = match serde_json::from_value::<ContentBlock>(raw.clone()) {
                Ok(block) => block,
                Err(e) => {
                    trace!(target: "cockpit::transcript", "Skipping malformed content block: {}", e);
                    continue;
                }
            };

            match block {
                ContentBlock::ToolUse { id, name, input } => self.handle_start(id, name, &input, at),
                ContentBlock::ToolResult {
                    tool_use_id,
                    content,
                    is_error,
                } => self.handle_result(&tool_use_id, is_error, &content, at),
                ContentBlock::Text { .. } | ContentBlock::Unknown => {}
            }
        }
    }

    fn handle_start(&mut self, id: String, name: String, input: &Value, at: DateTime<Utc>) {
        if self.invocations.contains_key(&id) {
            debug!(target: "cockpit::transcript", "Ignoring duplicate start for {}", id);
            return;
        }

        let invocation = if name == AGENT_TOOL {
            let prompt = str_field(input, "prompt");
            Invocation::Agent(AgentInvocation {
                id: id.clone(),
                subagent_type: str_field(input, "subagent_type")
                    .unwrap_or("unknown")
                    .to_string(),
                model_hint: prompt.and_then(ModelFamily::detect),
                description: str_field(input, "description")
                    .map(str::to_string)
                    .or_else(|| prompt.map(|p| p.chars().take(DESCRIPTION_FALLBACK_CHARS).collect())),
                status: InvocationStatus::Running,
                start_time: at,
                end_time: None,
                error: None,
            })
        } else if name == SKILL_TOOL {
            Invocation::Skill(SkillInvocation {
                id: id.clone(),
                name: str_field(input, "skill").unwrap_or("unknown").to_string(),
                args: str_field(input, "args").map(str::to_string),
                status: InvocationStatus::Running,
                start_time: at,
                end_time: None,
                error: None,
            })
        } else {
            Invocation::Tool(ToolInvocation {
                id: id.clone(),
                target: extract_target(&name, input),
                name,
                status: InvocationStatus::Running,
                start_time: at,
                end_time: None,
                error: None,
            })
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.invocations.insert(id, Tracked { seq, invocation });
    }

    fn handle_result(&mut self, id: &str, is_error: bool, content: &Value, at: DateTime<Utc>) {
        let Some(tracked) = self.invocations.get_mut(id) else {
            trace!(target: "cockpit::transcript", "Result for unknown id {}", id);
            return;
        };

        if tracked.invocation.status().is_terminal() {
            debug!(target: "cockpit::transcript", "Ignoring repeated result for {}", id);
            return;
        }

        let error = if is_error { extract_text(content) } else { None };
        tracked.invocation.finalize(is_error, error, at);

        let writes_todos = matches!(&tracked.invocation, Invocation::Tool(t) if t.name == TODO_TOOL);
        if writes_todos && !is_error {
            match parse_todos(content) {
                Some(todos) => self.todos = todos,
                None => {
                    debug!(target: "cockpit::transcript", "Todo result for {} had no parseable list", id)
                }
            }
        }
    }

    /// Materialize the capped, most-recent-first listings.
    pub fn state(&self) -> TranscriptState {
        let mut tools = Vec::new();
        let mut agents = Vec::new();
        let mut skills = Vec::new();

        for tracked in self.invocations.values() {
            match &tracked.invocation {
                Invocation::Tool(t) => tools.push((tracked.seq, t.start_time, t.clone())),
                Invocation::Agent(a) => agents.push((tracked.seq, a.start_time, a.clone())),
                Invocation::Skill(s) => skills.push((tracked.seq, s.start_time, s.clone())),
            }
        }

        TranscriptState {
            tools: most_recent(tools, self.limits.max_tools),
            agents: most_recent(agents, self.limits.max_agents),
            todos: self.todos.clone(),
            skills: most_recent(skills, self.limits.max_skills),
        }
    }

    pub fn finish(self) -> TranscriptState {
        self.state()
    }
}

/// Sort by start time descending, ties in encounter order, and cap.
fn most_recent<T>(mut items: Vec<(usize, DateTime<Utc>, T)>, max: usize) -> Vec<T> {
    items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    items.into_iter().take(max).map(|(_, _, item)| item).collect()
}

/// Build transcript state from a line-oriented reader.
///
/// Lines that are not valid UTF-8 are decoded lossily and go through the
/// normal parse path. A read error stops processing; whatever was accumulated
/// is returned.
pub fn build_state<R: BufRead>(
    mut reader: R,
    limits: TranscriptLimits,
    clock: DateTime<Utc>,
) -> TranscriptState {
    let mut builder = TranscriptStateBuilder::new(limits, clock);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                builder.process_line(line.trim_end_matches(['\n', '\r']));
            }
            Err(e) => {
                warn!(target: "cockpit::transcript", "Stopped reading transcript: {}", e);
                break;
            }
        }
    }

    let state = builder.finish();
    debug!(
        target: "cockpit::transcript",
        "Parsed {} tools, {} agents, {} skills, {} todos",
        state.tools.len(),
        state.agents.len(),
        state.skills.len(),
        state.todos.len()
    );
    state
}

/// Build transcript state from the file at `path`.
///
/// A missing path or file yields an empty state.
pub fn load_transcript(
    path: Option<&Path>,
    limits: TranscriptLimits,
    clock: DateTime<Utc>,
) -> TranscriptState {
    let Some(path) = path else {
        debug!(target: "cockpit::transcript", "No transcript path provided");
        return TranscriptState::default();
    };

    match File::open(path) {
        Ok(file) => build_state(BufReader::new(file), limits, clock),
        Err(e) => {
            debug!(target: "cockpit::transcript", "Transcript {:?} unavailable: {}", path, e);
            TranscriptState::default()
        }
    }
}

fn parse_timestamp(ts: Option<&str>) -> Option<DateTime<Utc>> {
    ts.and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn str_field<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    input.get(key).and_then(Value::as_str)
}

/// Human-meaningful target for the tools that have one.
fn extract_target(tool_name: &str, input: &Value) -> Option<String> {
    let key = match tool_name {
        "Read" | "Edit" | "Write" => "file_path",
        "Bash" => "command",
        "Grep" => "pattern",
        _ => return None,
    };
    str_field(input, key).map(str::to_string)
}

/// Text of a result payload: the string itself or its joined text blocks.
fn extract_text(content: &Value) -> Option<String> {
    let text = match content {
        Value::String(s) => s.clone(),
        Value::Array(blocks) => blocks
            .iter()
            .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
            .filter_map(|b| str_field(b, "text"))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    };
    (!text.is_empty()).then_some(text)
}

/// Parse a replacement todo list out of a todo-tool result payload.
///
/// Accepts a JSON array of items or an object holding one under `todos` or
/// `newTodos`, given directly, as string content, or inside a text block.
fn parse_todos(content: &Value) -> Option<Vec<TodoItem>> {
    match content {
        Value::String(text) => parse_todo_text(text),
        Value::Array(blocks) => todos_from_value(content.clone()).or_else(|| {
            blocks
                .iter()
                .filter_map(|b| str_field(b, "text"))
                .find_map(parse_todo_text)
        }),
        Value::Object(_) => todos_from_value(content.clone()),
        _ => None,
    }
}

fn parse_todo_text(text: &str) -> Option<Vec<TodoItem>> {
    serde_json::from_str::<Value>(text.trim())
        .ok()
        .and_then(todos_from_value)
}

fn todos_from_value(value: Value) -> Option<Vec<TodoItem>> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("todos").or_else(|| map.remove("newTodos"))?,
        _ => return None,
    };
    serde_json::from_value(list).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use cockpit_types::TodoStatus;
    use serde_json::json;
    use std::io::Cursor;

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn builder() -> TranscriptStateBuilder {
        TranscriptStateBuilder::new(TranscriptLimits::default(), clock())
    }

    fn start(id: &str, name: &str, input: Value, ts: &str) -> String {
        json!({
            "timestamp": ts,
            "message": {"content": [{"type": "tool_use", "id": id, "name": name, "input": input}]}
        })
        .to_string()
    }

    fn result(id: &str, is_error: bool, content: Value, ts: &str) -> String {
        json!({
            "timestamp": ts,
            "message": {"content": [{
                "type": "tool_result", "tool_use_id": id, "is_error": is_error, "content": content
            }]}
        })
        .to_string()
    }

    // ==================== Start / Result Lifecycle ====================

    #[test]
    fn test_read_start_then_result_completes() {
        let mut b = builder();
        b.process_line(&start("t1", "Read", json!({"file_path": "/src/main.rs"}), "2025-01-01T10:00:00Z"));
        b.process_line(&result("t1", false, json!("fn main() {}"), "2025-01-01T10:00:02Z"));

        let state = b.finish();
        assert_eq!(state.tools.len(), 1);
        let tool = &state.tools[0];
        assert_eq!(tool.name, "Read");
        assert_eq!(tool.target.as_deref(), Some("/src/main.rs"));
        assert_eq!(tool.status, InvocationStatus::Completed);
        assert_eq!(
            tool.end_time,
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 2).unwrap())
        );
        assert!(tool.error.is_none());
    }

    #[test]
    fn test_error_result_stores_text() {
        let mut b = builder();
        b.process_line(&start("t1", "Bash", json!({"command": "cargo test"}), "2025-01-01T10:00:00Z"));
        b.process_line(&result(
            "t1",
            true,
            json!([{"type": "text", "text": "exit code 101"}]),
            "2025-01-01T10:00:05Z",
        ));

        let tool = &b.state().tools[0];
        assert_eq!(tool.status, InvocationStatus::Error);
        assert_eq!(tool.target.as_deref(), Some("cargo test"));
        assert_eq!(tool.error.as_deref(), Some("exit code 101"));
    }

    #[test]
    fn test_unknown_result_is_noop() {
        let mut b = builder();
        b.process_line(&start("t1", "Grep", json!({"pattern": "TODO"}), "2025-01-01T10:00:00Z"));
        let before = b.state();
        b.process_line(&result("nope", false, json!("x"), "2025-01-01T10:00:01Z"));
        assert_eq!(b.state(), before);
    }

    #[test]
    fn test_repeated_result_is_noop() {
        let mut b = builder();
        b.process_line(&start("t1", "Edit", json!({"file_path": "a.rs"}), "2025-01-01T10:00:00Z"));
        b.process_line(&result("t1", false, json!("ok"), "2025-01-01T10:00:01Z"));
        let before = b.state();
        b.process_line(&result("t1", true, json!("late failure"), "2025-01-01T10:00:09Z"));
        assert_eq!(b.state(), before);
        assert_eq!(before.tools[0].status, InvocationStatus::Completed);
    }

    #[test]
    fn test_duplicate_start_first_wins() {
        let mut b = builder();
        b.process_line(&start("t1", "Read", json!({"file_path": "first.rs"}), "2025-01-01T10:00:00Z"));
        b.process_line(&start("t1", "Task", json!({"prompt": "x"}), "2025-01-01T10:00:01Z"));

        let state = b.finish();
        assert_eq!(state.tools.len(), 1);
        assert!(state.agents.is_empty());
        assert_eq!(state.tools[0].target.as_deref(), Some("first.rs"));
    }

    // ==================== Categories ====================

    #[test]
    fn test_task_creates_agent_with_model_hint() {
        let mut b = builder();
        b.process_line(&start(
            "a1",
            "Task",
            json!({
                "subagent_type": "Explore",
                "description": "Find config loaders",
                "prompt": "Use a Haiku model to search the repo"
            }),
            "2025-01-01T10:00:00Z",
        ));
        b.process_line(&result("a1", false, json!("done"), "2025-01-01T10:01:00Z"));

        let state = b.finish();
        assert!(state.tools.is_empty());
        let agent = &state.agents[0];
        assert_eq!(agent.subagent_type, "Explore");
        assert_eq!(agent.model_hint, Some(ModelFamily::Haiku));
        assert_eq!(agent.description.as_deref(), Some("Find config loaders"));
        assert_eq!(agent.status, InvocationStatus::Completed);
    }

    #[test]
    fn test_agent_description_falls_back_to_prompt() {
        let mut b = builder();
        let prompt = "x".repeat(80);
        b.process_line(&start("a1", "Task", json!({"prompt": prompt}), "2025-01-01T10:00:00Z"));

        let agent = &b.state().agents[0];
        assert_eq!(agent.subagent_type, "unknown");
        assert_eq!(agent.model_hint, None);
        assert_eq!(agent.description.as_ref().map(|d| d.len()), Some(50));
    }

    #[test]
    fn test_skill_invocation() {
        let mut b = builder();
        b.process_line(&start("s1", "Skill", json!({"skill": "pdf", "args": "report.pdf"}), "2025-01-01T10:00:00Z"));

        let state = b.finish();
        assert_eq!(state.skills.len(), 1);
        assert_eq!(state.skills[0].name, "pdf");
        assert_eq!(state.skills[0].args.as_deref(), Some("report.pdf"));
        assert_eq!(state.skills[0].status, InvocationStatus::Running);
    }

    #[test]
    fn test_target_only_for_known_tools() {
        assert_eq!(extract_target("Glob", &json!({"pattern": "*.rs"})), None);
        assert_eq!(
            extract_target("Write", &json!({"file_path": "/x"})).as_deref(),
            Some("/x")
        );
        assert_eq!(extract_target("Read", &json!({})), None);
    }

    // ==================== Todos ====================

    fn todo_payload() -> Value {
        json!({"todos": [
            {"content": "Parse config", "status": "completed", "activeForm": "Parsing config"},
            {"content": "Render tiers", "status": "in_progress", "activeForm": "Rendering tiers"},
            {"content": "Write docs", "status": "pending", "activeForm": "Writing docs"}
        ]})
    }

    #[test]
    fn test_todo_write_replaces_list() {
        let mut b = builder();
        b.process_line(&start("w1", "TodoWrite", todo_payload(), "2025-01-01T10:00:00Z"));
        b.process_line(&result("w1", false, json!(todo_payload().to_string()), "2025-01-01T10:00:01Z"));

        let state = b.state();
        assert_eq!(state.todos.len(), 3);
        assert_eq!(state.todos[1].status, TodoStatus::InProgress);
        assert_eq!(state.current_todo().unwrap().content, "Render tiers");
        assert_eq!(state.completed_todos(), 1);

        let replacement = json!([{"content": "Only item", "status": "pending"}]);
        b.process_line(&start("w2", "TodoWrite", json!({}), "2025-01-01T10:00:02Z"));
        b.process_line(&result(
            "w2",
            false,
            json!([{"type": "text", "text": replacement.to_string()}]),
            "2025-01-01T10:00:03Z",
        ));
        let state = b.finish();
        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].content, "Only item");
    }

    #[test]
    fn test_todo_unparseable_result_keeps_list() {
        let mut b = builder();
        b.process_line(&start("w1", "TodoWrite", json!({}), "2025-01-01T10:00:00Z"));
        b.process_line(&result("w1", false, json!(todo_payload().to_string()), "2025-01-01T10:00:01Z"));
        b.process_line(&start("w2", "TodoWrite", json!({}), "2025-01-01T10:00:02Z"));
        b.process_line(&result(
            "w2",
            false,
            json!("Todos have been modified successfully"),
            "2025-01-01T10:00:03Z",
        ));

        let state = b.finish();
        assert_eq!(state.todos.len(), 3);
        assert_eq!(state.tools[0].status, InvocationStatus::Completed);
    }

    #[test]
    fn test_todo_error_result_keeps_list() {
        let mut b = builder();
        b.process_line(&start("w1", "TodoWrite", json!({}), "2025-01-01T10:00:00Z"));
        b.process_line(&result("w1", true, json!(todo_payload().to_string()), "2025-01-01T10:00:01Z"));
        assert!(b.finish().todos.is_empty());
    }

    #[test]
    fn test_parse_todos_shapes() {
        assert!(parse_todos(&json!({"newTodos": [{"content": "a", "status": "pending"}]})).is_some());
        assert!(parse_todos(&json!("not json")).is_none());
        assert!(parse_todos(&json!({"todos": [{"content": "a", "status": "bogus"}]})).is_none());
        assert_eq!(parse_todos(&json!("[]")), Some(vec![]));
        assert!(parse_todos(&json!(42)).is_none());
    }

    // ==================== Robustness ====================

    #[test]
    fn test_malformed_lines_skipped() {
        let log = [
            start("t1", "Read", json!({"file_path": "a"}), "2025-01-01T10:00:00Z"),
            "{not json".to_string(),
            String::new(),
            r#"{"timestamp":"2025-01-01T10:00:01Z","message":{"content":[{"type":"tool_use","name":"NoId"}]}}"#.to_string(),
            result("t1", false, json!("ok"), "2025-01-01T10:00:02Z"),
        ]
        .join("\n");

        let state = build_state(Cursor::new(log), TranscriptLimits::default(), clock());
        assert_eq!(state.tools.len(), 1);
        assert_eq!(state.tools[0].status, InvocationStatus::Completed);
    }

    #[test]
    fn test_malformed_block_does_not_drop_siblings() {
        let line = json!({
            "timestamp": "2025-01-01T10:00:00Z",
            "message": {"content": [
                {"type": "tool_use", "name": "Broken"},
                {"type": "thinking", "thinking": "..."},
                {"type": "tool_use", "id": "t2", "name": "Glob", "input": {}}
            ]}
        });
        let mut b = builder();
        b.process_line(&line.to_string());
        assert_eq!(b.state().tools.len(), 1);
        assert_eq!(b.state().tools[0].id, "t2");
    }

    #[test]
    fn test_missing_timestamp_uses_clock() {
        let mut b = builder();
        b.process_line(r#"{"message":{"content":[{"type":"tool_use","id":"t1","name":"Glob","input":{}}]}}"#);
        assert_eq!(b.state().tools[0].start_time, clock());
    }

    #[test]
    fn test_string_content_ignored() {
        let mut b = builder();
        b.process_line(r#"{"timestamp":"2025-01-01T10:00:00Z","message":{"content":"hello"}}"#);
        assert!(b.state().is_empty());
    }

    // ==================== Ordering & Caps ====================

    #[test]
    fn test_most_recent_first_and_capped() {
        let limits = TranscriptLimits {
            max_tools: 2,
            ..TranscriptLimits::default()
        };
        let mut b = TranscriptStateBuilder::new(limits, clock());
        b.process_line(&start("t1", "Read", json!({}), "2025-01-01T10:00:00Z"));
        b.process_line(&start("t2", "Read", json!({}), "2025-01-01T10:00:02Z"));
        b.process_line(&start("t3", "Read", json!({}), "2025-01-01T10:00:01Z"));

        let ids: Vec<_> = b.finish().tools.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["t2", "t3"]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let mut b = builder();
        for id in ["a", "b", "c"] {
            b.process_line(&start(id, "Glob", json!({}), "2025-01-01T10:00:00Z"));
        }
        let ids: Vec<_> = b.finish().tools.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_transcript_missing_source() {
        assert!(load_transcript(None, TranscriptLimits::default(), clock()).is_empty());
        let missing = Path::new("/definitely/not/here.jsonl");
        assert!(load_transcript(Some(missing), TranscriptLimits::default(), clock()).is_empty());
    }
}
