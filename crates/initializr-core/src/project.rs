//! The set of answers sent to the generator to produce a project

use crate::metadata::Metadata;
use anyhow::Result;
use url::form_urlencoded;

/// Everything the generator needs to build a project archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    /// Version of the generated project itself, e.g. `0.0.1-SNAPSHOT`
    pub version: String,
    pub description: String,
    pub package_name: Option<String>,
    pub language: String,
    pub java_version: String,
    pub boot_version: String,
    pub project_type: String,
    pub packaging: String,
    pub dependencies: Vec<String>,
}

impl ProjectRequest {
    /// A request answering every question with the generator's defaults
    pub fn with_defaults(metadata: &Metadata) -> Self {
        let owned = |s: Option<&str>| s.unwrap_or_default().to_string();

        Self {
            name: metadata.name.default_or_empty().to_string(),
            group_id: metadata.group_id.default_or_empty().to_string(),
            artifact_id: metadata.artifact_id.default_or_empty().to_string(),
            version: metadata.version.default_or_empty().to_string(),
            description: metadata.description.default_or_empty().to_string(),
            package_name: metadata.package_name.default.clone(),
            language: owned(metadata.language.default_id()),
            java_version: owned(metadata.java_version.default_id()),
            boot_version: owned(metadata.boot_version.default_id()),
            project_type: owned(metadata.project_type.default_id()),
            packaging: owned(metadata.packaging.default_id()),
            dependencies: Vec::new(),
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` body
    pub fn to_form_body(&self) -> String {
        let mut form = form_urlencoded::Serializer::new(String::new());
        let fields = [
            ("name", self.name.as_str()),
            ("groupId", self.group_id.as_str()),
            ("artifactId", self.artifact_id.as_str()),
            ("version", self.version.as_str()),
            ("description", self.description.as_str()),
            ("packageName", self.package_name.as_deref().unwrap_or("")),
            ("language", self.language.as_str()),
            ("javaVersion", self.java_version.as_str()),
            ("bootVersion", self.boot_version.as_str()),
            ("type", self.project_type.as_str()),
            ("packaging", self.packaging.as_str()),
        ];
        for (key, value) in fields {
            if !value.is_empty() {
                form.append_pair(key, value);
            }
        }
        if !self.dependencies.is_empty() {
            form.append_pair("dependencies", &self.dependencies.join(","));
        }
        form.finish()
    }
}

/// Identifiers (project name, group, artifact) must be non-empty and space-free
pub fn validate_identifier(value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        anyhow::bail!("should not be empty");
    }
    if value.contains(char::is_whitespace) {
        anyhow::bail!("should not contain spaces");
    }
    Ok(())
}
