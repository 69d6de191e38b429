//! Runtime detection for the Java toolchain

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if a JDK is available
///
/// `java -version` writes to stderr on most distributions, so both streams are read.
pub fn check_java() -> RuntimeInfo {
    let output = Command::new("java").arg("-version").output();

    match output {
        Ok(out) if out.status.success() => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let stdout = String::from_utf8_lossy(&out.stdout);
            RuntimeInfo {
                name: "Java",
                version: parse_java_version(&stderr).or_else(|| parse_java_version(&stdout)),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Java",
            version: None,
            available: false,
        },
    }
}

/// Pull the quoted version out of `openjdk version "21.0.2" 2024-01-16`
fn parse_java_version(output: &str) -> Option<String> {
    let first_line = output.lines().next()?;
    let start = first_line.find('"')? + 1;
    let len = first_line[start..].find('"')?;
    Some(first_line[start..start + len].to_string())
}
