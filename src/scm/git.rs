//! Git changelog provider
//!
//! Queries the most recent entry via `git log --max-count=1` in the module's
//! working copy. The log fields are separated with the ASCII unit separator
//! so commit messages containing newlines survive intact.

use crate::error::ScmError;
use crate::scm::exec::run_scm_command;
use crate::scm::{ChangeLogEntry, ScmProvider};
use async_trait::async_trait;
use chrono::DateTime;
use std::path::Path;
use std::time::Duration;

const FIELD_SEP: char = '\u{1f}';

// %H hash, %an author, %aI author date (strict ISO 8601), %B raw body
const LOG_FORMAT: &str = "%H\u{1f}%an\u{1f}%aI\u{1f}%B";

/// Provider backed by the `git` command-line client
pub struct GitProvider {
    timeout: Duration,
}

impl GitProvider {
    /// Creates a new git provider with the given per-query timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ScmProvider for GitProvider {
    fn provider_type(&self) -> &'static str {
        "git"
    }

    async fn latest_entry(&self, working_copy: &Path) -> Result<Option<ChangeLogEntry>, ScmError> {
        let format_arg = format!("--format={}", LOG_FORMAT);
        let output = run_scm_command(
            "git",
            &["log", "--max-count=1", &format_arg],
            working_copy,
            self.timeout,
        )
        .await?;

        if !output.success {
            // A repository with no commits yet has an empty changelog, which
            // is not a failure: the module simply classifies as modified.
            if output.stderr.contains("does not have any commits") {
                return Ok(None);
            }
            return Err(ScmError::changelog(
                working_copy,
                format!("git log failed: {}", output.stderr.trim()),
            ));
        }

        if output.stdout.trim().is_empty() {
            return Ok(None);
        }

        parse_log_entry(&output.stdout, working_copy).map(Some)
    }
}

/// Parses one `%H<US>%an<US>%aI<US>%B` record
fn parse_log_entry(stdout: &str, working_copy: &Path) -> Result<ChangeLogEntry, ScmError> {
    let mut parts = stdout.splitn(4, FIELD_SEP);
    let revision = parts.next().map(str::trim);
    let author = parts.next();
    let date = parts.next();
    let comment = parts.next();

    match (revision, author, date, comment) {
        (Some(revision), Some(author), Some(date), Some(comment)) => Ok(ChangeLogEntry {
            revision: revision.to_string(),
            author: author.to_string(),
            timestamp: DateTime::parse_from_rfc3339(date).ok(),
            comment: comment.trim_end().to_string(),
        }),
        _ => Err(ScmError::changelog(
            working_copy,
            format!("unexpected git log output: {}", stdout.trim()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::process::Command;

    fn parse(stdout: &str) -> Result<ChangeLogEntry, ScmError> {
        parse_log_entry(stdout, &PathBuf::from("/work"))
    }

    #[test]
    fn test_parse_log_entry() {
        let entry = parse(
            "abc123\u{1f}Jane Dev\u{1f}2024-03-11T10:35:00+01:00\u{1f}fix flaky test\n",
        )
        .unwrap();
        assert_eq!(entry.revision, "abc123");
        assert_eq!(entry.author, "Jane Dev");
        assert!(entry.timestamp.is_some());
        assert_eq!(entry.comment, "fix flaky test");
    }

    #[test]
    fn test_parse_multiline_comment() {
        let entry =
            parse("abc\u{1f}Jane\u{1f}2024-03-11T10:35:00Z\u{1f}subject\n\nbody line\n").unwrap();
        assert_eq!(entry.comment, "subject\n\nbody line");
    }

    #[test]
    fn test_parse_bad_date_keeps_entry() {
        let entry = parse("abc\u{1f}Jane\u{1f}not-a-date\u{1f}msg").unwrap();
        assert!(entry.timestamp.is_none());
        assert_eq!(entry.comment, "msg");
    }

    #[test]
    fn test_parse_truncated_record_is_error() {
        let err = parse("abc\u{1f}Jane").unwrap_err();
        assert!(matches!(err, ScmError::Changelog { .. }));
    }

    /// Returns true if a usable git binary is on PATH
    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_AUTHOR_NAME", "Test Author")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test Author")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    #[tokio::test]
    async fn test_latest_entry_from_real_repository() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "--quiet"]);
        git(dir.path(), &["commit", "--quiet", "--allow-empty", "-m", "first change"]);
        git(
            dir.path(),
            &["commit", "--quiet", "--allow-empty", "-m", "second change"],
        );

        let provider = GitProvider::new(Duration::from_secs(30));
        let entry = provider.latest_entry(dir.path()).await.unwrap().unwrap();
        assert_eq!(entry.comment, "second change");
        assert_eq!(entry.author, "Test Author");
        assert!(entry.timestamp.is_some());
    }

    #[tokio::test]
    async fn test_latest_entry_empty_repository() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "--quiet"]);

        let provider = GitProvider::new(Duration::from_secs(30));
        let entry = provider.latest_entry(dir.path()).await.unwrap();
        assert!(entry.is_none());
    }

    #[tokio::test]
    async fn test_latest_entry_not_a_repository() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let provider = GitProvider::new(Duration::from_secs(30));
        let err = provider.latest_entry(dir.path()).await.unwrap_err();
        assert!(matches!(err, ScmError::Changelog { .. }));
    }
}
