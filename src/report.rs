use crate::git::GitLogResult;
use chrono::NaiveDate;

/// Render the deterministic markdown report
///
/// Total function: identical inputs (including `today`) produce
/// byte-identical output. The commit list renders hash and subject
/// only; author and date stay in the data model.
pub fn render_report(result: &GitLogResult, repo_name: &str, today: NaiveDate) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Daily Report - {}", today.format("%Y-%m-%d")));
    lines.push(String::new());
    lines.push(format!("## Repository: {}", repo_name));
    lines.push(String::new());

    if result.commits.is_empty() {
        lines.push("No commits today.".to_string());
        return lines.join("\n");
    }

    lines.push("## Commits".to_string());
    lines.push(String::new());

    for commit in &result.commits {
        lines.push(format!("- `{}` {}", commit.hash, commit.message));
    }

    lines.push(String::new());
    lines.push("## Statistics".to_string());
    lines.push(String::new());
    lines.push(format!("- Commits: {}", result.commits.len()));
    lines.push(format!("- Insertions: +{}", result.stats.insertions));
    lines.push(format!("- Deletions: -{}", result.stats.deletions));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{ChangeStats, CommitRecord};

    fn sample_result() -> GitLogResult {
        GitLogResult {
            commits: vec![
                CommitRecord {
                    hash: "abc123".to_string(),
                    date: "2024-01-02 10:00:00 +0900".to_string(),
                    author: "Alice".to_string(),
                    message: "feat: add reporting".to_string(),
                },
                CommitRecord {
                    hash: "def456".to_string(),
                    date: "2024-01-01 09:00:00 +0900".to_string(),
                    author: "Bob".to_string(),
                    message: "fix: handle | in message".to_string(),
                },
            ],
            stats: ChangeStats {
                insertions: 12,
                deletions: 3,
            },
            raw_log: String::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    #[test]
    fn test_render_empty_result() {
        let report = render_report(&GitLogResult::default(), "myrepo", date());

        assert!(report.contains("# Daily Report - 2024-01-02"));
        assert!(report.contains("## Repository: myrepo"));
        assert!(report.contains("No commits today."));
        assert!(!report.contains("## Statistics"));
    }

    #[test]
    fn test_render_commit_list_and_stats() {
        let result = sample_result();
        let report = render_report(&result, "myrepo", date());

        assert!(report.contains("- `abc123` feat: add reporting"));
        assert!(report.contains("- `def456` fix: handle | in message"));
        assert!(report.contains(&format!("- Commits: {}", result.commits.len())));
        assert!(report.contains("- Insertions: +12"));
        assert!(report.contains("- Deletions: -3"));
    }

    #[test]
    fn test_render_omits_author_and_date_from_list() {
        let report = render_report(&sample_result(), "myrepo", date());
        assert!(!report.contains("Alice"));
        assert!(!report.contains("+0900"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let result = sample_result();
        let first = render_report(&result, "myrepo", date());
        let second = render_report(&result, "myrepo", date());
        assert_eq!(first, second);
    }
}
