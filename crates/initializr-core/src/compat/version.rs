//! Lenient version parsing for platform versions published by the generator

use anyhow::Result;
use semver::Version;

/// Legacy dotted qualifiers and the semver pre-release they map to.
/// An empty replacement means the qualifier marks a final release.
const LEGACY_QUALIFIERS: &[(&str, &str)] = &[
    (".RELEASE", ""),
    (".BUILD-SNAPSHOT", "-SNAPSHOT"),
    (".SNAPSHOT", "-SNAPSHOT"),
];

/// Parse version string, handling the formats the generator has used over time
///
/// Accepts plain semver (`3.2.0`, `3.4.0-M1`), a leading `v`, two-component
/// versions (`3.2`) and the older dotted qualifiers (`2.7.18.RELEASE`,
/// `3.0.0.M4`, `2.1.0.BUILD-SNAPSHOT`).
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = normalize(version_str);
    Version::parse(&cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

fn normalize(version_str: &str) -> String {
    let trimmed = version_str.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    for (legacy, replacement) in LEGACY_QUALIFIERS {
        if let Some(base) = trimmed.strip_suffix(legacy) {
            return format!("{}{}", pad_core(base), replacement);
        }
    }

    // `3.0.0.M4` / `3.0.0.RC1`: a fourth dotted segment is a pre-release tag
    let (core, pre) = match trimmed.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (trimmed, None),
    };
    let segments: Vec<&str> = core.split('.').collect();
    if segments.len() == 4 && pre.is_none() {
        return format!("{}-{}", segments[..3].join("."), segments[3]);
    }

    match pre {
        Some(pre) => format!("{}-{}", pad_core(core), pre),
        None => pad_core(core),
    }
}

/// Pad `3` or `3.2` out to a full `major.minor.patch` triple
fn pad_core(core: &str) -> String {
    match core.split('.').count() {
        1 => format!("{}.0.0", core),
        2 => format!("{}.0", core),
        _ => core.to_string(),
    }
}
