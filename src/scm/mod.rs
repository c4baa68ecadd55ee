//! SCM providers for fetching changelog information
//!
//! This module provides:
//! - Connection string parsing into repository handles
//! - A provider trait with git and mercurial implementations
//! - A manager mapping connection-string prefixes to providers, built from
//!   an explicit configuration object (provider overrides are applied at
//!   construction time, never through global state)

mod exec;
mod git;
mod mercurial;
mod repository;

pub use git::GitProvider;
pub use mercurial::MercurialProvider;
pub use repository::ScmRepository;

use crate::error::{ConfigError, ScmError};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Default timeout for a single changelog query (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The most recent changelog entry of a working copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeLogEntry {
    /// Revision identifier (commit hash, changeset id)
    pub revision: String,
    /// Author of the change
    pub author: String,
    /// Change timestamp, when the client reported a parseable one
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Full commit message
    pub comment: String,
}

/// Trait for SCM changelog providers
#[async_trait]
pub trait ScmProvider: Send + Sync {
    /// Get the provider type identifier
    fn provider_type(&self) -> &'static str;

    /// Fetch the single most recent changelog entry for a working copy,
    /// or `None` for an empty history
    async fn latest_entry(&self, working_copy: &Path) -> Result<Option<ChangeLogEntry>, ScmError>;
}

/// Configuration for the SCM manager
#[derive(Debug, Clone)]
pub struct ScmConfig {
    /// Prefix-to-implementation overrides, applied in order at construction
    pub provider_overrides: Vec<(String, String)>,
    /// Timeout per changelog query
    pub timeout: Duration,
}

impl Default for ScmConfig {
    fn default() -> Self {
        Self {
            provider_overrides: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Create a provider instance for a named implementation
fn create_provider(implementation: &str, timeout: Duration) -> Option<Arc<dyn ScmProvider>> {
    match implementation {
        "git" => Some(Arc::new(GitProvider::new(timeout))),
        "hg" => Some(Arc::new(MercurialProvider::new(timeout))),
        _ => None,
    }
}

/// Registry of SCM providers keyed by connection-string prefix
pub struct ScmManager {
    providers: HashMap<String, Arc<dyn ScmProvider>>,
}

impl ScmManager {
    /// Builds the registry: default providers first, then the configured
    /// overrides in their given order
    pub fn new(config: &ScmConfig) -> Result<Self, ConfigError> {
        let mut providers: HashMap<String, Arc<dyn ScmProvider>> = HashMap::new();
        providers.insert(
            "git".to_string(),
            Arc::new(GitProvider::new(config.timeout)),
        );
        providers.insert(
            "hg".to_string(),
            Arc::new(MercurialProvider::new(config.timeout)),
        );

        for (prefix, implementation) in &config.provider_overrides {
            let provider = create_provider(implementation, config.timeout).ok_or_else(|| {
                ConfigError::UnknownImplementation {
                    name: implementation.clone(),
                }
            })?;
            providers.insert(prefix.clone(), provider);
        }

        Ok(Self { providers })
    }

    /// Looks up the provider registered for a repository's prefix
    pub fn provider_for(&self, repository: &ScmRepository) -> Result<&dyn ScmProvider, ScmError> {
        self.providers
            .get(&repository.provider)
            .map(|provider| provider.as_ref())
            .ok_or_else(|| ScmError::unsupported_provider(&repository.provider))
    }

    /// Parses the connection string and fetches the latest changelog entry
    /// for the working copy
    pub async fn latest_entry(
        &self,
        connection: &str,
        working_copy: &Path,
    ) -> Result<Option<ChangeLogEntry>, ScmError> {
        let repository = ScmRepository::parse(connection)?;
        let provider = self.provider_for(&repository)?;
        provider.latest_entry(working_copy).await
    }
}
