//! relroots - Release-readiness reporter library
//!
//! This library inspects a multi-module reactor and reports, per module:
//! - whether it has changed since its last tagged release (judged by the
//!   release-marker comment in the latest changelog entry)
//! - which other reactor modules depend on it, and which of those pin its
//!   exact current version

pub mod analyze;
pub mod analyzer;
pub mod cli;
pub mod error;
pub mod progress;
pub mod reactor;
pub mod report;
pub mod scm;
