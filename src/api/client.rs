//! Cache-enabled request client for the portfolio API
//!
//! Every request goes through [`ApiClient::request`]: read requests are
//! memoized in the shared [`ResponseCache`] for the cache TTL, and any
//! request failure falls back to a previously cached response (fresh or
//! stale) before the error is surfaced. Mutations are never cached and
//! invalidate their resource prefix before hitting the network.

use super::cache::ResponseCache;
use super::error::ApiError;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// What a request intends to do to the resource
///
/// Carried explicitly instead of being inferred from an optional HTTP method,
/// so cacheability is decided by intent rather than by string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Fetch a resource (GET); responses are cached
    Read,
    /// Create a resource (POST)
    Create,
    /// Replace a resource (PUT)
    Update,
    /// Remove a resource (DELETE)
    Delete,
}

impl RequestKind {
    /// True for the only cacheable kind
    pub fn is_read(self) -> bool {
        matches!(self, RequestKind::Read)
    }

    /// Stable name used in cache keys
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Read => "read",
            RequestKind::Create => "create",
            RequestKind::Update => "update",
            RequestKind::Delete => "delete",
        }
    }

    fn method(self) -> Method {
        match self {
            RequestKind::Read => Method::GET,
            RequestKind::Create => Method::POST,
            RequestKind::Update => Method::PUT,
            RequestKind::Delete => Method::DELETE,
        }
    }
}

/// Per-request options
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Request intent, drives HTTP method and cacheability
    pub kind: RequestKind,
    /// JSON body to send, if any
    pub body: Option<Value>,
    /// Bypass the fresh-cache check and always hit the network
    pub skip_cache: bool,
}

impl RequestOptions {
    /// A plain cached read
    pub fn read() -> Self {
        Self {
            kind: RequestKind::Read,
            body: None,
            skip_cache: false,
        }
    }

    /// A read that always hits the network
    pub fn read_uncached() -> Self {
        Self {
            skip_cache: true,
            ..Self::read()
        }
    }

    /// A create request carrying a JSON body
    pub fn create(body: Value) -> Self {
        Self {
            kind: RequestKind::Create,
            body: Some(body),
            skip_cache: false,
        }
    }

    /// An update request carrying a JSON body
    pub fn update(body: Value) -> Self {
        Self {
            kind: RequestKind::Update,
            body: Some(body),
            skip_cache: false,
        }
    }

    /// A delete request
    pub fn delete() -> Self {
        Self {
            kind: RequestKind::Delete,
            body: None,
            skip_cache: false,
        }
    }
}

/// A message sent through the contact form endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

/// HTTP client for the portfolio API with response caching
///
/// Cheap to clone; the HTTP connection pool and the response cache are both
/// shared across clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL of the API server
    base_url: String,
    /// Per-request time bound
    timeout: Duration,
    /// Shared response cache
    cache: Arc<ResponseCache>,
}

impl ApiClient {
    /// Creates a client with its own cache using the default TTL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_cache(base_url, timeout, Arc::new(ResponseCache::new()))
    }

    /// Creates a client over an externally constructed cache
    ///
    /// Lets tests drive cache expiry through a [`super::ManualClock`] and
    /// inspect the table from outside.
    pub fn with_cache(
        base_url: impl Into<String>,
        timeout: Duration,
        cache: Arc<ResponseCache>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
            timeout,
            cache,
        }
    }

    /// Generates the cache key for a request
    ///
    /// Starts with the endpoint path so `invalidate("/api/projects")` catches
    /// both the collection and item keys. `skip_cache` is a behavior flag,
    /// not part of request identity, so it never appears in the key.
    fn cache_key(path: &str, options: &RequestOptions) -> String {
        let body = options
            .body
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_default();
        format!("{}|{}|{}", path, options.kind.as_str(), body)
    }

    /// Performs a request against the API
    ///
    /// # Behavior
    /// - Read requests first check the cache; a fresh entry is returned with
    ///   no network activity (unless `skip_cache` is set).
    /// - The network call is bounded by the configured timeout.
    /// - Successful read responses are written to the cache.
    /// - On any failure (timeout, transport, status, decode), a previously
    ///   cached response for the same key is returned even if expired; the
    ///   error propagates only when no cached response exists.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let cache_key = Self::cache_key(path, &options);
        let cacheable = options.kind.is_read();

        if cacheable && !options.skip_cache {
            if let Some(cached) = self.cache.read(&cache_key) {
                if cached.is_fresh {
                    debug!(path, "serving fresh cached response");
                    return Ok(cached.value);
                }
            }
        }

        match self.dispatch(path, &options).await {
            Ok(value) => {
                if cacheable {
                    self.cache.write(&cache_key, value.clone());
                }
                Ok(value)
            }
            Err(api_error) => {
                // Degrade to whatever we still hold for this key, stale included
                if cacheable {
                    if let Some(cached) = self.cache.read(&cache_key) {
                        warn!(path, error = %api_error, "request failed, using cached response");
                        return Ok(cached.value);
                    }
                }
                Err(api_error)
            }
        }
    }

    /// Issues the HTTP call and decodes the JSON body
    async fn dispatch(&self, path: &str, options: &RequestOptions) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http_client
            .request(options.kind.method(), &url)
            .timeout(self.timeout);

        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.timeout))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Removes cached responses whose key starts with the given endpoint prefix
    pub fn invalidate(&self, prefix: &str) -> usize {
        let removed = self.cache.invalidate_prefix(prefix);
        debug!(prefix, removed, "invalidated cached responses");
        removed
    }

    /// Empties the response cache
    pub fn invalidate_all(&self) {
        self.cache.clear();
        debug!("invalidated all cached responses");
    }

    // ==================== Projects ====================

    /// Fetches all projects
    pub async fn get_projects(&self) -> Result<Value, ApiError> {
        self.request("/api/projects", RequestOptions::read()).await
    }

    /// Fetches a single project by id
    pub async fn get_project(&self, id: i64) -> Result<Value, ApiError> {
        self.request(&format!("/api/projects/{}", id), RequestOptions::read())
            .await
    }

    /// Creates a project
    pub async fn create_project(&self, data: Value) -> Result<Value, ApiError> {
        self.invalidate("/api/projects");
        self.request("/api/projects", RequestOptions::create(data))
            .await
    }

    /// Updates a project
    pub async fn update_project(&self, id: i64, data: Value) -> Result<Value, ApiError> {
        self.invalidate("/api/projects");
        self.request(
            &format!("/api/projects/{}", id),
            RequestOptions::update(data),
        )
        .await
    }

    /// Deletes a project
    pub async fn delete_project(&self, id: i64) -> Result<Value, ApiError> {
        self.invalidate("/api/projects");
        self.request(&format!("/api/projects/{}", id), RequestOptions::delete())
            .await
    }

    // ==================== Skills ====================

    /// Fetches all skills
    pub async fn get_skills(&self) -> Result<Value, ApiError> {
        self.request("/api/skills", RequestOptions::read()).await
    }

    /// Fetches a single skill by id
    pub async fn get_skill(&self, id: i64) -> Result<Value, ApiError> {
        self.request(&format!("/api/skills/{}", id), RequestOptions::read())
            .await
    }

    /// Creates a skill
    pub async fn create_skill(&self, data: Value) -> Result<Value, ApiError> {
        self.invalidate("/api/skills");
        self.request("/api/skills", RequestOptions::create(data))
            .await
    }

    /// Updates a skill
    pub async fn update_skill(&self, id: i64, data: Value) -> Result<Value, ApiError> {
        self.invalidate("/api/skills");
        self.request(&format!("/api/skills/{}", id), RequestOptions::update(data))
            .await
    }

    /// Deletes a skill
    pub async fn delete_skill(&self, id: i64) -> Result<Value, ApiError> {
        self.invalidate("/api/skills");
        self.request(&format!("/api/skills/{}", id), RequestOptions::delete())
            .await
    }

    // ==================== Singleton sections ====================

    /// Fetches the about section
    pub async fn get_about(&self) -> Result<Value, ApiError> {
        self.request("/api/about", RequestOptions::read()).await
    }

    /// Updates the about section
    pub async fn update_about(&self, data: Value) -> Result<Value, ApiError> {
        self.invalidate("/api/about");
        self.request("/api/about", RequestOptions::update(data))
            .await
    }

    /// Fetches the hero section
    pub async fn get_hero(&self) -> Result<Value, ApiError> {
        self.request("/api/hero", RequestOptions::read()).await
    }

    /// Updates the hero section
    pub async fn update_hero(&self, data: Value) -> Result<Value, ApiError> {
        self.invalidate("/api/hero");
        self.request("/api/hero", RequestOptions::update(data)).await
    }

    /// Fetches the contact details
    pub async fn get_contact(&self) -> Result<Value, ApiError> {
        self.request("/api/contact", RequestOptions::read()).await
    }

    /// Updates the contact details
    pub async fn update_contact(&self, data: Value) -> Result<Value, ApiError> {
        self.invalidate("/api/contact");
        self.request("/api/contact", RequestOptions::update(data))
            .await
    }

    /// Sends a message through the contact form
    pub async fn send_contact_message(&self, message: &ContactMessage) -> Result<Value, ApiError> {
        let body = serde_json::to_value(message)?;
        self.request("/api/contact/message", RequestOptions::create(body))
            .await
    }

    // ==================== Blog ====================

    /// Fetches all blog posts
    pub async fn get_blog_posts(&self) -> Result<Value, ApiError> {
        self.request("/api/blog", RequestOptions::read()).await
    }

    /// Fetches a single blog post by id
    pub async fn get_blog_post(&self, id: i64) -> Result<Value, ApiError> {
        self.request(&format!("/api/blog/{}", id), RequestOptions::read())
            .await
    }

    // ==================== Health ====================

    /// Checks whether the API reports itself healthy
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let value = self.request("/api/health", RequestOptions::read()).await?;
        Ok(value["status"] == "healthy")
    }
}
