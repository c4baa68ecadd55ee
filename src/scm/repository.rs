//! SCM repository handles parsed from connection strings
//!
//! Connection strings use the Maven SCM form `scm:<provider>:<url>`, e.g.
//! `scm:git:https://github.com/example/app.git`. The provider token selects
//! the implementation; the URL is retained for display.

use crate::error::ScmError;
use std::fmt;

/// A parsed SCM repository handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScmRepository {
    /// Provider prefix, e.g. `git` or `hg`
    pub provider: String,
    /// Repository URL, everything after the provider token
    pub url: String,
}

impl ScmRepository {
    /// Parses a `scm:<provider>:<url>` connection string
    pub fn parse(connection: &str) -> Result<Self, ScmError> {
        let rest = connection.strip_prefix("scm:").ok_or_else(|| {
            ScmError::invalid_descriptor(connection, "missing 'scm:' prefix")
        })?;

        let (provider, url) = rest.split_once(':').ok_or_else(|| {
            ScmError::invalid_descriptor(connection, "missing provider or repository URL")
        })?;

        if provider.is_empty() {
            return Err(ScmError::invalid_descriptor(connection, "empty provider"));
        }
        if url.is_empty() {
            return Err(ScmError::invalid_descriptor(
                connection,
                "empty repository URL",
            ));
        }

        Ok(Self {
            provider: provider.to_string(),
            url: url.to_string(),
        })
    }
}

impl fmt::Display for ScmRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scm:{}:{}", self.provider, self.url)
    }
}
