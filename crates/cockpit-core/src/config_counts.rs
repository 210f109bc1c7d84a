//! Counts of project configuration files under `<cwd>/.claude`.

use cockpit_types::ConfigCounts;
use std::fs;
use std::path::Path;
use tracing::debug;

const HOOK_EXTENSIONS: [&str; 3] = ["sh", "js", "ts"];

pub fn count_configs(cwd: Option<&Path>) -> ConfigCounts {
    let Some(cwd) = cwd else {
        return ConfigCounts::default();
    };
    let claude_dir = cwd.join(".claude");

    let counts = ConfigCounts {
        claude_md: count_files(&claude_dir, |name| {
            name.ends_with(".md") && name.to_uppercase().contains("CLAUDE")
        }),
        rules: count_files(&claude_dir.join("rules"), |name| name.ends_with(".md")),
        mcp: usize::from(claude_dir.join("mcp.json").is_file()),
        hooks: count_files(&claude_dir.join("hooks"), |name| {
            Path::new(name)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| HOOK_EXTENSIONS.contains(&e))
        }),
    };

    debug!(target: "cockpit::config", "Config counts for {:?}: {:?}", cwd, counts);
    counts
}

/// Regular files in `dir` whose name matches. A missing or unreadable
/// directory counts as zero.
fn count_files(dir: &Path, matches: impl Fn(&str) -> bool) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter(|entry| entry.file_name().to_str().is_some_and(&matches))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_no_cwd() {
        assert_eq!(count_configs(None), ConfigCounts::default());
    }

    #[test]
    fn test_missing_claude_dir() {
        let dir = TempDir::new().unwrap();
        assert!(count_configs(Some(dir.path())).is_empty());
    }

    #[test]
    fn test_counts_each_category() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, ".claude/CLAUDE.md");
        touch(root, ".claude/claude.local.md");
        touch(root, ".claude/notes.md");
        touch(root, ".claude/rules/style.md");
        touch(root, ".claude/rules/testing.md");
        touch(root, ".claude/rules/readme.txt");
        touch(root, ".claude/mcp.json");
        touch(root, ".claude/hooks/pre.sh");
        touch(root, ".claude/hooks/post.ts");
        touch(root, ".claude/hooks/notes.md");
        fs::create_dir_all(root.join(".claude/hooks/nested.sh")).unwrap();

        let counts = count_configs(Some(root));
        assert_eq!(counts.claude_md, 2);
        assert_eq!(counts.rules, 2);
        assert_eq!(counts.mcp, 1);
        assert_eq!(counts.hooks, 2);
    }
}
