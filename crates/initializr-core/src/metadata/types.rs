//! Metadata document types and parsing

use crate::compat::{ComponentDescriptor, ParsedInterval};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Client metadata published by the generator service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub dependencies: DependencyGroups,

    /// Build system and project layout (Maven, Gradle Groovy, Gradle Kotlin)
    #[serde(rename = "type")]
    pub project_type: Select<ProjectTypeOption>,

    pub packaging: Select<SelectOption>,
    pub java_version: Select<SelectOption>,
    pub language: Select<SelectOption>,
    pub boot_version: Select<SelectOption>,

    #[serde(default)]
    pub group_id: TextField,
    #[serde(default)]
    pub artifact_id: TextField,
    #[serde(default)]
    pub version: TextField,
    #[serde(default)]
    pub name: TextField,
    #[serde(default)]
    pub description: TextField,
    #[serde(default)]
    pub package_name: TextField,
}

/// A single-choice field with an optional preselected default
#[derive(Debug, Clone, Deserialize)]
pub struct Select<T> {
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectTypeOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: ProjectTypeTags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectTypeTags {
    #[serde(default)]
    pub build: Option<String>,
    #[serde(default)]
    pub dialect: Option<String>,
    /// `project` for full project archives, `build` for a lone build file
    #[serde(default)]
    pub format: Option<String>,
}

/// A free-text field with a suggested default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextField {
    #[serde(default)]
    pub default: Option<String>,
}

impl TextField {
    pub fn default_or_empty(&self) -> &str {
        self.default.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyGroups {
    #[serde(default)]
    pub values: Vec<DependencyGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyGroup {
    pub name: String,
    #[serde(default)]
    pub values: Vec<DependencyOption>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent means compatible with every platform version
    #[serde(default)]
    pub version_range: ParsedInterval,
}

/// Common accessors for select values
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for SelectOption {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ProjectTypeOption {
    fn id(&self) -> &str {
        &self.id
    }
}

impl<T: Identified> Select<T> {
    /// The declared default, or the first value when none is declared
    pub fn default_id(&self) -> Option<&str> {
        self.default
            .as_deref()
            .or_else(|| self.values.first().map(|v| v.id()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.iter().any(|v| v.id() == id)
    }
}

impl ProjectTypeOption {
    pub fn is_project(&self) -> bool {
        self.tags.format.as_deref() == Some("project")
    }
}

impl Metadata {
    /// Parse the metadata document
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse generator metadata")
    }

    /// Project types that produce a full project archive
    pub fn project_types(&self) -> Vec<&ProjectTypeOption> {
        self.project_type
            .values
            .iter()
            .filter(|t| t.is_project())
            .collect()
    }

    /// Every dependency, flattened out of its group, with its compatibility interval
    pub fn components(&self) -> Vec<ComponentDescriptor> {
        self.dependencies
            .values
            .iter()
            .flat_map(|group| {
                group.values.iter().map(move |dep| ComponentDescriptor {
                    id: dep.id.clone(),
                    name: dep.name.clone(),
                    description: dep.description.clone(),
                    group: group.name.clone(),
                    compatibility: dep.version_range.interval().clone(),
                    compatibility_issue: dep.version_range.degraded_reason().map(str::to_string),
                })
            })
            .collect()
    }
}
