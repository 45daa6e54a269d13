use crate::git::{ChangeStats, CommitRecord};

/// Field separator used in the `--pretty` log format
pub const FIELD_DELIMITER: char = '|';

/// Parse the delimited commit-log output into records
///
/// One line per commit: `hash|date|author|subject`. Blank lines are
/// skipped; so are lines missing any of the leading fields.
pub fn parse_log(raw: &str) -> Vec<CommitRecord> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_log_line)
        .collect()
}

/// Parse a single log line
///
/// Splits on the first three delimiters only: the subject keeps any `|`
/// it contains, so commit messages never shift the leading fields.
pub fn parse_log_line(line: &str) -> Option<CommitRecord> {
    let mut fields = line.splitn(4, FIELD_DELIMITER);
    let hash = fields.next()?;
    let date = fields.next()?;
    let author = fields.next()?;
    let message = fields.next()?;

    if hash.is_empty() {
        return None;
    }

    Some(CommitRecord {
        hash: hash.to_string(),
        date: date.to_string(),
        author: author.to_string(),
        message: message.to_string(),
    })
}

/// Sum numstat output into insertion/deletion totals
///
/// Numstat lines look like `3\t1\tpath/to/file`. Lines whose first two
/// tokens are not both integers (binary markers use `-`, the pretty
/// format leaves blank separators) are skipped.
pub fn sum_numstat(raw: &str) -> ChangeStats {
    let mut stats = ChangeStats::default();

    for line in raw.lines() {
        let mut tokens = line.split_whitespace();
        let added = tokens.next().and_then(|t| t.parse::<u64>().ok());
        let removed = tokens.next().and_then(|t| t.parse::<u64>().ok());

        if let (Some(added), Some(removed)) = (added, removed) {
            stats.insertions += added;
            stats.deletions += removed;
        }
    }

    stats
}
