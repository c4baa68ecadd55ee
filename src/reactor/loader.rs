//! Loader for the reactor descriptor file
//!
//! The descriptor is a TOML file with one `[[module]]` table per reactor
//! module. Declaration order is preserved; it drives classification and
//! report order.

use crate::error::ReactorError;
use crate::reactor::module::RawModule;
use crate::reactor::ModuleDescriptor;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default descriptor filename looked up under a target directory
pub const REACTOR_FILENAME: &str = "reactor.toml";

/// The loaded reactor: an ordered, read-only set of module descriptors
#[derive(Debug, Clone)]
pub struct Reactor {
    /// Path the descriptor was loaded from
    pub descriptor_path: PathBuf,
    /// Modules in declaration order
    pub modules: Vec<ModuleDescriptor>,
}

impl Reactor {
    /// Number of modules in the reactor
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if the reactor holds no modules
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RawReactor {
    #[serde(default, rename = "module")]
    modules: Vec<RawModule>,
}

/// Resolves the descriptor path: a file is taken as-is, a directory is
/// expected to contain `reactor.toml`
fn resolve_descriptor(path: &Path) -> Result<PathBuf, ReactorError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    let candidate = path.join(REACTOR_FILENAME);
    if candidate.is_file() {
        return Ok(candidate);
    }
    Err(ReactorError::not_found(candidate))
}

/// Loads the reactor descriptor from `path` (the file itself or a directory
/// containing it)
pub fn load_reactor(path: &Path) -> Result<Reactor, ReactorError> {
    let descriptor_path = resolve_descriptor(path)?;
    let content = std::fs::read_to_string(&descriptor_path)
        .map_err(|e| ReactorError::read_error(&descriptor_path, e))?;

    let raw: RawReactor = toml::from_str(&content)
        .map_err(|e| ReactorError::toml_parse_error(&descriptor_path, e.to_string()))?;

    if raw.modules.is_empty() {
        return Err(ReactorError::EmptyReactor {
            path: descriptor_path,
        });
    }

    // Working-copy paths in the descriptor are relative to the reactor root
    let root = descriptor_path.parent().unwrap_or(Path::new("."));
    let mut modules = Vec::with_capacity(raw.modules.len());
    for raw_module in raw.modules {
        let mut module = raw_module.into_descriptor()?;
        module.path = root.join(&module.path);
        modules.push(module);
    }

    Ok(Reactor {
        descriptor_path,
        modules,
    })
}
