//! HTTP client for the project generator service
//!
//! Two calls are made against the service root:
//! - `GET metadata/client` for the available options
//! - `POST starter.zip` with the answers, returning the project archive

use crate::metadata::{Metadata, METADATA_MEDIA_TYPE};
use crate::product::ProductConfig;
use crate::project::ProjectRequest;
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

/// Where the generator service lives
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    base: Url,
}

impl ServiceEndpoint {
    /// Service URL from the product's override variable, else its default
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.service_url_env())
            .unwrap_or_else(|_| config.default_service_url().to_string());
        Self::parse(&url_str)
    }

    pub fn parse(url_str: &str) -> Result<Self> {
        let base =
            Url::parse(url_str).with_context(|| format!("Invalid service URL: {}", url_str))?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build a URL by appending path segments, preserving query parameters
    pub fn join(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Talks to the generator service
pub struct GeneratorClient {
    endpoint: ServiceEndpoint,
    client: reqwest::Client,
}

impl GeneratorClient {
    /// Create a new client with a custom user agent
    pub fn new(endpoint: ServiceEndpoint, user_agent: &str) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a client from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        Self::with_override(config, None)
    }

    /// Create a client from a product config, preferring an explicit service URL
    pub fn with_override<C: ProductConfig>(config: &C, service_url: Option<&str>) -> Result<Self> {
        let endpoint = match service_url {
            Some(url) => ServiceEndpoint::parse(url)?,
            None => ServiceEndpoint::from_config(config)?,
        };
        Ok(Self::new(endpoint, config.user_agent()))
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Fetch the options the service can generate projects with
    pub async fn fetch_metadata(&self) -> Result<Metadata> {
        let url = self.endpoint.join(&["metadata", "client"])?;
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, METADATA_MEDIA_TYPE)
            .send()
            .await
            .with_context(|| format!("Failed to fetch metadata from {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to fetch metadata from {}: HTTP {}",
                url,
                response.status()
            );
        }

        let content = response.text().await?;
        Metadata::from_json(&content)
    }

    /// Ask the service to generate a project, returning the archive bytes
    pub async fn generate(&self, request: &ProjectRequest) -> Result<Vec<u8>> {
        let url = self.endpoint.join(&["starter.zip"])?;
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(request.to_form_body())
            .send()
            .await
            .with_context(|| format!("Failed to request project from {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to generate project '{}' from {}: HTTP {}",
                request.name,
                url,
                response.status()
            );
        }

        Ok(response.bytes().await?.to_vec())
    }
}
