//! Release analysis core
//!
//! This module provides:
//! - Release-root classification against the release marker
//! - Cross-referencing of downstream dependents within the reactor

mod classifier;
mod crossref;

pub use classifier::{classify_module, Classification, ReleaseStatus, RELEASE_MARKER};
pub use crossref::{cross_reference, CrossReference, Dependent};
