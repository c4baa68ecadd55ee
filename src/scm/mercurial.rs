//! Mercurial changelog provider
//!
//! Queries the most recent entry via `hg log --limit 1` in the module's
//! working copy, using the same unit-separated record layout as the git
//! provider.

use crate::error::ScmError;
use crate::scm::exec::run_scm_command;
use crate::scm::{ChangeLogEntry, ScmProvider};
use async_trait::async_trait;
use chrono::DateTime;
use std::path::Path;
use std::time::Duration;

const FIELD_SEP: char = '\u{1f}';

const LOG_TEMPLATE: &str = "{node}\u{1f}{author}\u{1f}{date|rfc3339date}\u{1f}{desc}";

/// Provider backed by the `hg` command-line client
pub struct MercurialProvider {
    timeout: Duration,
}

impl MercurialProvider {
    /// Creates a new mercurial provider with the given per-query timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ScmProvider for MercurialProvider {
    fn provider_type(&self) -> &'static str {
        "hg"
    }

    async fn latest_entry(&self, working_copy: &Path) -> Result<Option<ChangeLogEntry>, ScmError> {
        let template_arg = format!("--template={}", LOG_TEMPLATE);
        let output = run_scm_command(
            "hg",
            &["log", "--limit", "1", &template_arg],
            working_copy,
            self.timeout,
        )
        .await?;

        if !output.success {
            return Err(ScmError::changelog(
                working_copy,
                format!("hg log failed: {}", output.stderr.trim()),
            ));
        }

        // hg log on an empty repository succeeds with no output
        if output.stdout.trim().is_empty() {
            return Ok(None);
        }

        parse_log_entry(&output.stdout, working_copy).map(Some)
    }
}

fn parse_log_entry(stdout: &str, working_copy: &Path) -> Result<ChangeLogEntry, ScmError> {
    let mut parts = stdout.splitn(4, FIELD_SEP);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(revision), Some(author), Some(date), Some(comment)) => Ok(ChangeLogEntry {
            revision: revision.trim().to_string(),
            author: author.to_string(),
            timestamp: DateTime::parse_from_rfc3339(date).ok(),
            comment: comment.trim_end().to_string(),
        }),
        _ => Err(ScmError::changelog(
            working_copy,
            format!("unexpected hg log output: {}", stdout.trim()),
        )),
    }
}
