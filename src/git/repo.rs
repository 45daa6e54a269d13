use std::path::Path;
use std::process::Command;

/// Name used when neither the remote nor the working tree yields one
const FALLBACK_NAME: &str = "unknown";

/// Check whether `path` is inside a git working directory
pub fn is_git_repository(path: &Path) -> bool {
    Command::new("git")
        .current_dir(path)
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Resolve a display name for the repository at `path`
///
/// Prefers the trailing segment of the `origin` remote URL (with any
/// `.git` suffix stripped), then the working tree's top-level directory
/// name, then a fixed placeholder.
pub fn repository_name(path: &Path) -> String {
    if let Some(url) = git_stdout(path, &["remote", "get-url", "origin"]) {
        if let Some(name) = name_from_remote_url(&url) {
            return name;
        }
    }

    if let Some(toplevel) = git_stdout(path, &["rev-parse", "--show-toplevel"]) {
        if let Some(name) = name_from_toplevel(&toplevel) {
            return name;
        }
    }

    FALLBACK_NAME.to_string()
}

/// Run a git query and return trimmed stdout on success
fn git_stdout(path: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .current_dir(path)
        .args(args)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

/// Extract the repository name from a remote URL
///
/// Works for both URL styles (`https://host/org/repo.git`,
/// `git@host:org/repo.git`): take the segment after the last `/`, strip
/// an optional `.git` suffix.
fn name_from_remote_url(url: &str) -> Option<String> {
    let (_, tail) = url.trim().rsplit_once('/')?;
    let name = tail.strip_suffix(".git").unwrap_or(tail);

    if name.is_empty() {
        return None;
    }

    Some(name.to_string())
}

/// Extract the repository name from the working tree's top-level path
fn name_from_toplevel(toplevel: &str) -> Option<String> {
    Path::new(toplevel.trim())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(dir)
            .args(args)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn test_name_from_remote_url_ssh() {
        assert_eq!(
            name_from_remote_url("git@host:org/myrepo.git").as_deref(),
            Some("myrepo")
        );
    }

    #[test]
    fn test_name_from_remote_url_https() {
        assert_eq!(
            name_from_remote_url("https://github.com/org/myrepo.git").as_deref(),
            Some("myrepo")
        );
        assert_eq!(
            name_from_remote_url("https://github.com/org/myrepo").as_deref(),
            Some("myrepo")
        );
    }

    #[test]
    fn test_name_from_remote_url_rejects_slashless() {
        assert!(name_from_remote_url("git@host:myrepo.git").is_none());
    }

    #[test]
    fn test_name_from_toplevel() {
        assert_eq!(
            name_from_toplevel("/home/u/proj\n").as_deref(),
            Some("proj")
        );
    }

    #[test]
    fn test_is_git_repository() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_git_repository(temp_dir.path()));

        git(temp_dir.path(), &["init", "-q"]);
        assert!(is_git_repository(temp_dir.path()));
    }

    #[test]
    fn test_repository_name_from_remote() {
        let temp_dir = TempDir::new().unwrap();
        git(temp_dir.path(), &["init", "-q"]);
        git(
            temp_dir.path(),
            &["remote", "add", "origin", "git@host:org/myrepo.git"],
        );

        assert_eq!(repository_name(temp_dir.path()), "myrepo");
    }

    #[test]
    fn test_repository_name_from_toplevel() {
        let temp_dir = TempDir::new().unwrap();
        git(temp_dir.path(), &["init", "-q"]);

        let dir_name = temp_dir
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(repository_name(temp_dir.path()), dir_name);
    }

    #[test]
    fn test_repository_name_fallback() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(repository_name(temp_dir.path()), FALLBACK_NAME);
    }
}
