//! Downstream dependency cross-referencing
//!
//! For one target module, scans every other module's declared dependency
//! list for entries matching the target's group and artifact. The target is
//! excluded by its position in the module sequence, not by coordinate, so
//! two distinct modules that happen to share coordinates still see each
//! other as dependents.

use crate::reactor::ModuleDescriptor;

/// One module depending on the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependent {
    /// Index of the dependent module in the reactor sequence
    pub module: usize,
    /// The version string the dependent declares for the target
    pub declared_version: String,
}

/// Cross-reference result for one target module
#[derive(Debug, Clone, Default)]
pub struct CrossReference {
    /// Dependent modules in encounter order, one entry per module
    pub dependents: Vec<Dependent>,
    /// True if any matching dependency pins the target's exact version
    pub has_explicit_match: bool,
}

impl CrossReference {
    /// Returns true if no module depends on the target
    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    /// Dependents whose declared version equals `version` exactly
    pub fn explicit_dependents<'a>(
        &'a self,
        version: &'a str,
    ) -> impl Iterator<Item = &'a Dependent> {
        self.dependents
            .iter()
            .filter(move |d| d.declared_version == version)
    }
}

/// Cross-references the module at `target` against the whole reactor
///
/// A dependency matches on group and artifact string equality; the declared
/// version plays no part in matching but is recorded, with the last
/// declaration winning when a module lists the same coordinate twice. The
/// explicit flag compares declared versions against the target's current
/// version verbatim, with no range or semantic-version interpretation.
pub fn cross_reference(target: usize, modules: &[ModuleDescriptor]) -> CrossReference {
    let target_module = &modules[target];
    let mut result = CrossReference::default();

    for (index, candidate) in modules.iter().enumerate() {
        if index == target {
            continue;
        }
        for dependency in &candidate.dependencies {
            if !target_module.is_target_of(dependency) {
                continue;
            }
            match result.dependents.iter_mut().find(|d| d.module == index) {
                Some(existing) => existing.declared_version = dependency.version.clone(),
                None => result.dependents.push(Dependent {
                    module: index,
                    declared_version: dependency.version.clone(),
                }),
            }
            result.has_explicit_match =
                result.has_explicit_match || dependency.version == target_module.version;
        }
    }

    result
}
