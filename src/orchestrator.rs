use crate::ai::gemini::GeminiClient;
use crate::ai::prompt::build_report_prompt;
use crate::config::Config;
use crate::error::{GitDailyError, Result};
use crate::git::collector::Collector;
use crate::git::repo;
use crate::git::{GitLogResult, LogWindow};
use crate::report::render_report;
use chrono::{Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::debug;

/// Final result of one pipeline run
///
/// Two branches so callers can route the report and any diagnostic to
/// separate channels: the report body is never mixed with failure text.
#[derive(Debug)]
pub enum ReportOutcome {
    /// Report produced directly (deterministic, empty window, or a
    /// successful AI summary)
    Generated(String),
    /// AI summarization failed; deterministic report with the reason
    Recovered { report: String, diagnostic: String },
}

impl ReportOutcome {
    /// The report body
    pub fn report(&self) -> &str {
        match self {
            Self::Generated(report) => report,
            Self::Recovered { report, .. } => report,
        }
    }

    /// The fallback diagnostic, if any
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Generated(_) => None,
            Self::Recovered { diagnostic, .. } => Some(diagnostic.as_str()),
        }
    }
}

/// Orchestrator for the report pipeline
///
/// Collects once, then branches: empty window → minimal report; API key
/// configured and AI enabled → summarize with fallback; otherwise the
/// deterministic formatter.
pub struct Orchestrator {
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the pipeline for the repository at `repo_path`
    pub async fn run(
        &self,
        repo_path: &Path,
        window: LogWindow,
        use_ai: bool,
    ) -> Result<ReportOutcome> {
        let repo_name = repo::repository_name(repo_path);
        let result = Collector::new(window).collect(repo_path);
        let today = Local::now().date_naive();

        if result.commits.is_empty() {
            debug!("no commits in window, emitting minimal report");
            return Ok(ReportOutcome::Generated(render_report(
                &result, &repo_name, today,
            )));
        }

        let api_key = self.config.api_key.as_deref().filter(|_| use_ai);
        let api_key = match api_key {
            Some(key) => key,
            None => {
                return Ok(ReportOutcome::Generated(render_report(
                    &result, &repo_name, today,
                )));
            }
        };

        match self.summarize(&result, &repo_name, today, api_key).await {
            Ok(text) => Ok(ReportOutcome::Generated(text)),
            Err(err) => Ok(fallback(&result, &repo_name, today, &err)),
        }
    }

    /// Send the collected result to Gemini and return its text
    async fn summarize(
        &self,
        result: &GitLogResult,
        repo_name: &str,
        today: NaiveDate,
        api_key: &str,
    ) -> Result<String> {
        let client = GeminiClient::new(api_key.to_string())?;
        let prompt = build_report_prompt(result, repo_name, today);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Generating AI summary...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let generated = client.generate(prompt).await;
        spinner.finish_and_clear();

        generated
    }
}

/// Compose the fallback outcome for a failed summarization
///
/// Renders the already-collected result; the backend is not re-queried.
fn fallback(
    result: &GitLogResult,
    repo_name: &str,
    today: NaiveDate,
    err: &GitDailyError,
) -> ReportOutcome {
    ReportOutcome::Recovered {
        report: render_report(result, repo_name, today),
        diagnostic: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{ChangeStats, CommitRecord};

    fn sample_result() -> GitLogResult {
        GitLogResult {
            commits: vec![CommitRecord {
                hash: "abc123".to_string(),
                date: "2024-01-02 10:00:00 +0900".to_string(),
                author: "Alice".to_string(),
                message: "feat: add reporting".to_string(),
            }],
            stats: ChangeStats {
                insertions: 10,
                deletions: 5,
            },
            raw_log: String::new(),
        }
    }

    #[test]
    fn test_fallback_report_matches_deterministic_output() {
        let result = sample_result();
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let err = GitDailyError::gemini_api("request failed with status 503 Service Unavailable");

        let outcome = fallback(&result, "myrepo", today, &err);

        assert_eq!(outcome.report(), render_report(&result, "myrepo", today));
        assert_eq!(
            outcome.diagnostic(),
            Some("Gemini API error: request failed with status 503 Service Unavailable")
        );
    }

    #[test]
    fn test_generated_outcome_has_no_diagnostic() {
        let outcome = ReportOutcome::Generated("# Daily Report".to_string());
        assert_eq!(outcome.report(), "# Daily Report");
        assert!(outcome.diagnostic().is_none());
    }
}
