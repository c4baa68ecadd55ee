//! Release-root classification
//!
//! A module with an SCM connection is a release root. Its latest changelog
//! entry decides the status: the release-preparation step leaves a fixed
//! marker comment, so a latest entry containing the marker means nothing has
//! been committed since the last release.

use crate::error::ScmError;
use crate::reactor::ModuleDescriptor;
use crate::scm::{ChangeLogEntry, ScmManager};

/// Comment substring left by the release-preparation step
pub const RELEASE_MARKER: &str = "[maven-release-plugin] prepare for next development iteration";

/// Tri-state release status of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// No SCM connection configured; not a release root
    NotTracked,
    /// Latest changelog entry carries the release marker
    Unmodified,
    /// Changes have been committed since the last release (or the history
    /// is empty)
    Modified,
}

/// Classification result for one module
#[derive(Debug, Clone)]
pub struct Classification {
    /// The computed status
    pub status: ReleaseStatus,
    /// The latest changelog entry, when one was fetched
    pub latest_entry: Option<ChangeLogEntry>,
}

impl Classification {
    /// Status-only constructor for untracked modules
    pub fn not_tracked() -> Self {
        Self {
            status: ReleaseStatus::NotTracked,
            latest_entry: None,
        }
    }
}

/// Derives the status from the latest entry's comment
fn status_from_entry(entry: Option<&ChangeLogEntry>) -> ReleaseStatus {
    match entry {
        Some(entry) if entry.comment.contains(RELEASE_MARKER) => ReleaseStatus::Unmodified,
        _ => ReleaseStatus::Modified,
    }
}

/// Classifies a single module
///
/// Modules without an SCM connection are `NotTracked` and no changelog
/// query is made. Any SCM failure is returned as-is; the caller treats it
/// as fatal for the whole run.
pub async fn classify_module(
    module: &ModuleDescriptor,
    scm: &ScmManager,
) -> Result<Classification, ScmError> {
    let connection = match &module.scm {
        Some(connection) => connection,
        None => return Ok(Classification::not_tracked()),
    };

    let latest_entry = scm.latest_entry(connection, &module.path).await?;
    Ok(Classification {
        status: status_from_entry(latest_entry.as_ref()),
        latest_entry,
    })
}
