//! Generator metadata: the options a project can be generated with

mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use types::{
    DependencyGroup, DependencyGroups, DependencyOption, Identified, Metadata, ProjectTypeOption,
    ProjectTypeTags, Select, SelectOption, TextField,
};

/// Media type of the metadata document this crate understands
pub const METADATA_MEDIA_TYPE: &str = "application/vnd.initializr.v2.2+json";
