//! Product configuration trait for CLI binaries
//!
//! This trait defines what a binary must supply to drive the generation flow
//! against a particular generator service.

use crate::project::ProjectRequest;
use std::path::Path;

/// Configuration trait for generator-backed CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Generator service URL and its override variable
/// - Documentation links
/// - Post-generation instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default generator service root
    fn default_service_url(&self) -> &'static str;

    /// Environment variable name for overriding the service URL
    fn service_url_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, request: &ProjectRequest) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
