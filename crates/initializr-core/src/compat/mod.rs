//! Platform version compatibility for add-on components
//!
//! This module provides:
//! - Lenient version parsing for generator-published versions
//! - Version interval notation (parse, containment, display)
//! - Filtering the component list down to what a platform version supports

pub mod interval;
pub mod version;

pub use interval::{ParsedInterval, VersionInterval};
pub use version::parse_version;

/// An optional add-on component offered by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Name of the group the component is listed under
    pub group: String,
    pub compatibility: VersionInterval,
    /// Set when the published range was partly or wholly unusable and was relaxed
    pub compatibility_issue: Option<String>,
}

impl ComponentDescriptor {
    pub fn supports(&self, platform_version: &semver::Version) -> bool {
        self.compatibility.contains(platform_version)
    }
}

/// Components compatible with `platform_version`, in their original order
///
/// A platform version that cannot be parsed offers every component.
pub fn offered_components<'a>(
    all: &'a [ComponentDescriptor],
    platform_version: &str,
) -> Vec<&'a ComponentDescriptor> {
    match parse_version(platform_version) {
        Ok(version) => all.iter().filter(|c| c.supports(&version)).collect(),
        Err(_) => all.iter().collect(),
    }
}
