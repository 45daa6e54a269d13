use crate::git::parser;
use crate::git::{ChangeStats, GitLogResult, LogWindow};
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Log format matching the parser's four-field split
const LOG_FORMAT: &str = "--pretty=format:%h|%ai|%an|%s";

/// Collector for commit history and line-change statistics
///
/// Issues two independent `git log` queries over the same window: a
/// delimited commit log and a numstat report. The two are not required
/// to be transactionally consistent with each other.
pub struct Collector {
    window: LogWindow,
}

impl Collector {
    /// Create a new collector for a window
    pub fn new(window: LogWindow) -> Self {
        Self { window }
    }

    /// Collect commits and statistics from the repository at `repo_path`
    ///
    /// A failed git invocation degrades to an empty commit list and
    /// zero stats instead of propagating: an unreadable history and an
    /// empty window both render as the no-commits report.
    pub fn collect(&self, repo_path: &Path) -> GitLogResult {
        let raw_log = self.run_log(repo_path, &[LOG_FORMAT]).unwrap_or_default();
        let commits = parser::parse_log(&raw_log);
        let stats = self.collect_stats(repo_path);

        debug!(
            commits = commits.len(),
            insertions = stats.insertions,
            deletions = stats.deletions,
            "collected git history"
        );

        GitLogResult {
            commits,
            stats,
            raw_log: raw_log.trim().to_string(),
        }
    }

    fn collect_stats(&self, repo_path: &Path) -> ChangeStats {
        match self.run_log(repo_path, &["--numstat", "--pretty=format:"]) {
            Some(output) => parser::sum_numstat(&output),
            None => ChangeStats::default(),
        }
    }

    /// Run `git log` restricted to the window, with extra format args
    fn run_log(&self, repo_path: &Path, extra_args: &[&str]) -> Option<String> {
        let mut cmd = Command::new("git");
        cmd.current_dir(repo_path)
            .arg("log")
            .arg(format!("--since={}", self.window.since))
            .arg(format!("--until={}", self.window.until));

        if let Some(ref author) = self.window.author {
            cmd.arg(format!("--author={}", author));
        }

        cmd.args(extra_args);

        match cmd.output() {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                warn!(
                    status = %output.status,
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "git log failed, treating window as empty"
                );
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to run git, treating window as empty");
                None
            }
        }
    }
}
