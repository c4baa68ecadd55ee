//! Module descriptor structures

use crate::error::ReactorError;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

// Coordinate string: group:artifact:version, none of the parts empty.
// Group and artifact are restricted to the usual identifier characters;
// the version part takes anything that is not a further colon.
static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+):([A-Za-z0-9_.-]+):([^:]+)$").unwrap()
});

/// A declared dependency on another module, by coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    /// Group identifier
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Declared version string, compared verbatim (no range evaluation)
    pub version: String,
}

impl DependencyRef {
    /// Creates a new dependency reference
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Parses a compact `group:artifact:version` coordinate string
    pub fn parse(coordinate: &str, module_key: &str) -> Result<Self, ReactorError> {
        let caps = COORDINATE_RE
            .captures(coordinate.trim())
            .ok_or_else(|| ReactorError::invalid_coordinate(module_key, coordinate))?;
        Ok(Self::new(&caps[1], &caps[2], &caps[3]))
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// A single module of the reactor, as declared in the descriptor
///
/// Treated as read-only by all analysis stages; declaration order in the
/// descriptor file drives report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Group identifier
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Current version string
    pub version: String,
    /// Local working-copy path, relative to the reactor root
    pub path: PathBuf,
    /// SCM connection string, absent for modules that are not release roots
    pub scm: Option<String>,
    /// Declared dependencies, in declaration order
    pub dependencies: Vec<DependencyRef>,
}

impl ModuleDescriptor {
    /// Creates a new module descriptor without SCM connection or dependencies
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            path: path.into(),
            scm: None,
            dependencies: Vec::new(),
        }
    }

    /// Sets the SCM connection string (builder pattern)
    pub fn with_scm(mut self, connection: impl Into<String>) -> Self {
        self.scm = Some(connection.into());
        self
    }

    /// Adds a declared dependency (builder pattern)
    pub fn with_dependency(mut self, dependency: DependencyRef) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Canonical display key: `group:artifact:version`
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    /// Returns true if a dependency coordinate points at this module,
    /// matching on group and artifact only
    pub fn is_target_of(&self, dependency: &DependencyRef) -> bool {
        dependency.group == self.group && dependency.artifact == self.artifact
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Raw `[[module]]` table as it appears in reactor.toml
#[derive(Debug, Deserialize)]
pub(crate) struct RawModule {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub path: PathBuf,
    #[serde(default)]
    pub scm: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl RawModule {
    /// Resolves coordinate strings into a full descriptor
    pub(crate) fn into_descriptor(self) -> Result<ModuleDescriptor, ReactorError> {
        let key = format!("{}:{}:{}", self.group, self.artifact, self.version);
        let mut dependencies = Vec::with_capacity(self.dependencies.len());
        for coordinate in &self.dependencies {
            dependencies.push(DependencyRef::parse(coordinate, &key)?);
        }
        Ok(ModuleDescriptor {
            group: self.group,
            artifact: self.artifact,
            version: self.version,
            path: self.path,
            scm: self.scm,
            dependencies,
        })
    }
}
