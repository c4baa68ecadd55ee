//! Analysis coordinator
//!
//! Drives one run: load the reactor descriptor, classify every module in
//! declaration order, abort on the first SCM failure. Classification of the
//! whole reactor completes before any report line is emitted, so a failed
//! module never leaves a partial report behind.

use crate::analyze::{classify_module, Classification};
use crate::error::{AppError, ConfigError};
use crate::progress::Progress;
use crate::reactor::{load_reactor, Reactor};
use crate::scm::{ScmConfig, ScmManager};
use std::path::Path;

/// Coordinator for one analysis run
pub struct Analyzer {
    /// SCM provider registry built from the run configuration
    scm: ScmManager,
    /// Whether to show a progress bar during classification
    show_progress: bool,
}

/// Result of a completed analysis run
#[derive(Debug)]
pub struct AnalysisResult {
    /// The loaded reactor
    pub reactor: Reactor,
    /// One classification per module, in reactor order
    pub classifications: Vec<Classification>,
}

impl Analyzer {
    /// Create a new analyzer from an SCM configuration
    pub fn new(config: &ScmConfig, show_progress: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            scm: ScmManager::new(config)?,
            show_progress,
        })
    }

    /// Load the reactor at `path` and classify all of its modules
    pub async fn run(&self, path: &Path) -> Result<AnalysisResult, AppError> {
        let reactor = load_reactor(path)?;
        let classifications = self.classify_reactor(&reactor).await?;
        Ok(AnalysisResult {
            reactor,
            classifications,
        })
    }

    /// Classify every module of the reactor, preserving declaration order
    ///
    /// The first SCM failure aborts the run with an error naming the
    /// failing module; there is no retry and no partial result.
    pub async fn classify_reactor(
        &self,
        reactor: &Reactor,
    ) -> Result<Vec<Classification>, AppError> {
        let mut progress = Progress::new(self.show_progress);
        progress.start(reactor.len() as u64, "Checking for changes");

        let mut classifications = Vec::with_capacity(reactor.len());
        for module in &reactor.modules {
            progress.set_message(&module.key());
            match classify_module(module, &self.scm).await {
                Ok(classification) => classifications.push(classification),
                Err(e) => {
                    progress.finish_and_clear();
                    return Err(AppError::classification(module.key(), e));
                }
            }
            progress.inc();
        }

        progress.finish_and_clear();
        Ok(classifications)
    }
}
