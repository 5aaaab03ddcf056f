//! Progressive section data provider
//!
//! Every section is readable at all times: bundled content is available
//! synchronously, and live content replaces it when a fetch succeeds. A
//! failed fetch never removes content; it is recorded next to whatever the
//! section already shows.

use crate::api::{ApiClient, ApiError, RequestOptions};
use crate::content::{fallback, Section, SectionContent};
use crate::transform;
use chrono::{DateTime, Utc};

/// Where a section's current content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Compiled-in fallback content
    Bundled,
    /// Live content from the API
    Api,
}

/// A section's current content with its provenance
#[derive(Debug, Clone)]
pub struct SectionData {
    /// What the views render
    pub content: SectionContent,
    /// Where the content came from
    pub source: DataSource,
    /// Most recent fetch failure, if any; content stays valid regardless
    pub source_error: Option<String>,
    /// When the content was last set
    pub updated_at: DateTime<Utc>,
}

impl SectionData {
    /// Seeds a section with its bundled content
    pub fn bundled(section: Section) -> Self {
        Self {
            content: fallback::for_section(section),
            source: DataSource::Bundled,
            source_error: None,
            updated_at: Utc::now(),
        }
    }

    /// Replaces the content wholesale with a live fetch result
    pub fn apply_live(&mut self, content: SectionContent) {
        self.content = content;
        self.source = DataSource::Api;
        self.source_error = None;
        self.updated_at = Utc::now();
    }

    /// Records a failed fetch, leaving the current content in place
    pub fn record_failure(&mut self, error: String) {
        self.source_error = Some(error);
    }
}

/// Fetches section content through the cache-enabled client
#[derive(Debug, Clone)]
pub struct SectionProvider {
    client: ApiClient,
}

impl SectionProvider {
    /// Creates a provider over the given client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns bundled content for a section
    ///
    /// Synchronous and total; this is what renders before any network
    /// activity and whatever happens to the API.
    pub fn fallback(&self, section: Section) -> SectionContent {
        fallback::for_section(section)
    }

    /// Fetches and reshapes live content for a section
    ///
    /// Goes through the response cache, so repeat calls within the cache TTL
    /// cost no network activity.
    pub async fn fetch_live(&self, section: Section) -> Result<SectionContent, ApiError> {
        let raw = self
            .client
            .request(section.endpoint(), RequestOptions::read())
            .await?;
        transform::reshape(section, raw)
    }

    /// Drops the section's cached responses and refetches past the cache
    ///
    /// Always performs a network call, even when a fresh cached response
    /// exists.
    pub async fn refresh(&self, section: Section) -> Result<SectionContent, ApiError> {
        self.client.invalidate(section.endpoint());
        let raw = self
            .client
            .request(section.endpoint(), RequestOptions::read_uncached())
            .await?;
        transform::reshape(section, raw)
    }

    /// The underlying request client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
