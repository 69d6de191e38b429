//! Initializr Core - Shared library for generating projects from an Initializr service
//!
//! This library provides the core functionality for generating Spring Boot projects
//! through a remote generator service and unpacking them locally.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure version compatibility checks and archive extraction
//! - **Layer 2: Service Access** - Metadata model, project requests, the generator client
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use initializr_core::{compat, GeneratorClient, ProjectRequest};
//!
//! let client = GeneratorClient::from_config(&MyConfig)?;
//! let metadata = client.fetch_metadata().await?;
//! let components = metadata.components();
//! let offered = compat::offered_components(&components, "3.3.1");
//!
//! let request = ProjectRequest::with_defaults(&metadata);
//! let archive = client.generate(&request).await?;
//! initializr_core::extract_archive(&archive, std::path::Path::new(&request.name))?;
//! ```

pub mod catalog;
pub mod client;
pub mod compat;
pub mod extract;
pub mod metadata;
pub mod product;
pub mod project;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use client::{GeneratorClient, ServiceEndpoint};
pub use compat::{offered_components, ComponentDescriptor, ParsedInterval, VersionInterval};
pub use extract::{check_target_available, extract_archive, ExtractError, ExtractSummary};
pub use metadata::Metadata;
pub use product::ProductConfig;
pub use project::ProjectRequest;

#[cfg(feature = "tui")]
pub use tui::run;
