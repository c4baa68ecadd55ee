//! Reactor model and descriptor loading
//!
//! This module provides:
//! - Module descriptors with identity, SCM connection and declared dependencies
//! - Loader for the ordered `reactor.toml` descriptor list

mod loader;
mod module;

pub use loader::{load_reactor, Reactor, REACTOR_FILENAME};
pub use module::{DependencyRef, ModuleDescriptor};
