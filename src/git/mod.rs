pub mod collector;
pub mod parser;
pub mod repo;

/// One commit in the reporting window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Short commit hash
    pub hash: String,
    /// Author date as git reports it (not reparsed)
    pub date: String,
    /// Author display name (may be empty)
    pub author: String,
    /// Full subject line
    pub message: String,
}

/// Aggregate line-change counts over the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeStats {
    /// Lines added across all changed files
    pub insertions: u64,
    /// Lines removed across all changed files
    pub deletions: u64,
}

/// Everything collected from git for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct GitLogResult {
    /// Commits in backend order (newest first)
    pub commits: Vec<CommitRecord>,
    /// Line-change totals from the independent numstat query
    pub stats: ChangeStats,
    /// Original unparsed log output, kept for diagnostics
    pub raw_log: String,
}

/// Time window and author filter for the log queries
///
/// `since` and `until` are handed to git's own date parser verbatim
/// ("midnight", "2 days ago", an ISO date, ...), never validated here.
#[derive(Debug, Clone)]
pub struct LogWindow {
    pub since: String,
    pub until: String,
    pub author: Option<String>,
}

impl LogWindow {
    pub fn new(since: String, until: String, author: Option<String>) -> Self {
        Self {
            since,
            until,
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_stats_default() {
        let stats = ChangeStats::default();
        assert_eq!(stats.insertions, 0);
        assert_eq!(stats.deletions, 0);
    }

    #[test]
    fn test_git_log_result_default_is_empty() {
        let result = GitLogResult::default();
        assert!(result.commits.is_empty());
        assert!(result.raw_log.is_empty());
        assert_eq!(result.stats, ChangeStats::default());
    }
}
