//! The Ghost Content API client.
//!
//! One invocation = one upstream GET. No retries, no caching, no
//! batching. The API key travels as the `key` query parameter and the
//! API version as the `Accept-Version` header; response bodies pass
//! through as `serde_json::Value` without transformation.

use serde_json::Value;

use ghost_content_core::{Error, GhostConfig, Result};

use crate::params::{BrowseParams, ReadParams};
use crate::resource::Resource;

/// Client for the Ghost Content API.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its
/// connection pool across clones. Concurrent calls are independent
/// read-only requests and need no coordination.
#[derive(Debug, Clone)]
pub struct GhostContentClient {
    http: reqwest::Client,
    base_url: String,
    key: String,
    api_version: String,
}

impl GhostContentClient {
    /// Build a client from configuration.
    ///
    /// Fails with a configuration error when the admin domain or the
    /// Content API key is missing.
    pub fn new(config: &GhostConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let key = config.content_api_key()?.to_string();
        Ok(Self::from_parts(base_url, key, config.api_version.clone()))
    }

    /// Build a client from explicit parts.
    ///
    /// Useful for tests and non-standard deployments where the base
    /// URL is not derived from a domain.
    pub fn from_parts(
        base_url: impl Into<String>,
        key: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            key: key.into(),
            api_version: api_version.into(),
        }
    }

    /// The resolved base URL, always with a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Browse a resource collection.
    ///
    /// For resources that take no shaping parameters (settings), all
    /// supplied parameters are dropped and only the key is forwarded.
    pub async fn browse(&self, resource: Resource, params: &BrowseParams) -> Result<Value> {
        let pairs = if resource.supports_browse_params() {
            params.query_pairs(resource.supports_formats())
        } else {
            Vec::new()
        };
        self.execute_get(resource.collection_path(), &pairs).await
    }

    /// Read a single item by its opaque ID.
    pub async fn read_by_id(
        &self,
        resource: Resource,
        id: &str,
        params: &ReadParams,
    ) -> Result<Value> {
        let id = Self::require_identifier(resource, "id", id)?;
        let path = format!("{}{}/", resource.collection_path(), id);
        self.execute_get(&path, &params.query_pairs(resource.supports_formats()))
            .await
    }

    /// Read a single item by its slug.
    pub async fn read_by_slug(
        &self,
        resource: Resource,
        slug: &str,
        params: &ReadParams,
    ) -> Result<Value> {
        let slug = Self::require_identifier(resource, "slug", slug)?;
        let path = format!("{}slug/{}/", resource.collection_path(), slug);
        self.execute_get(&path, &params.query_pairs(resource.supports_formats()))
            .await
    }

    /// Validate a read identifier before any request is sent.
    fn require_identifier<'a>(
        resource: Resource,
        kind: &str,
        value: &'a str,
    ) -> Result<&'a str> {
        if resource.browse_only() {
            return Err(Error::invalid_params(format!(
                "{} supports browse only, not read by {kind}",
                resource.plural()
            )));
        }
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::invalid_params(format!(
                "{kind} must not be empty for {}",
                resource.singular()
            )));
        }
        Ok(value)
    }

    /// Execute a GET against `{base_url}{path}` and parse the JSON body.
    async fn execute_get(&self, path: &str, pairs: &[(&'static str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header("Accept-Version", &self.api_version)
            .query(&[("key", self.key.as_str())])
            .query(pairs)
            .send()
            .await
            .map_err(|e| Error::http(format!("GET {path}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(Error::api(status.as_u16(), extract_error_message(&body)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::serialization(format!("GET {path}: {e}")))
    }
}

/// Pull the message out of Ghost's error envelope
/// (`{"errors": [{"message": …}]}`), falling back to the raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("errors")?
                .get(0)?
                .get("message")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GhostContentClient {
        GhostContentClient::from_parts(server.uri(), "test-key", "v5.0")
    }

    #[test]
    fn test_from_parts_normalizes_trailing_slash() {
        let client = GhostContentClient::from_parts("http://localhost:2368", "k", "v5.0");
        assert_eq!(client.base_url(), "http://localhost:2368/");
    }

    #[tokio::test]
    async fn test_browse_hits_collection_path_once() {
        let server = MockServer::start().await;
        let body = json!({"posts": [{"id": "1", "title": "First"}]});
        Mock::given(method("GET"))
            .and(path("/posts/"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .browse(Resource::Posts, &BrowseParams::default())
            .await
            .unwrap();

        // Round-trip: body returned unchanged.
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_browse_forwards_documented_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/authors/"))
            .and(query_param("key", "test-key"))
            .and(query_param("filter", "slug:cameron"))
            .and(query_param("limit", "3"))
            .and(query_param("page", "2"))
            .and(query_param("order", "name asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authors": []})))
            .expect(1)
            .mount(&server)
            .await;

        let params = BrowseParams {
            filter: Some("slug:cameron".to_string()),
            limit: Some(3),
            page: Some(2),
            order: Some("name asc".to_string()),
            ..Default::default()
        };
        client_for(&server)
            .browse(Resource::Authors, &params)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_browse_strips_formats_for_unsupporting_resource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tags/"))
            .and(query_param("fields", "name"))
            .and(query_param_is_missing("formats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
            .expect(1)
            .mount(&server)
            .await;

        let params = BrowseParams {
            fields: Some("name".to_string()),
            formats: Some("html".to_string()),
            ..Default::default()
        };
        client_for(&server).browse(Resource::Tags, &params).await.unwrap();
    }

    #[tokio::test]
    async fn test_browse_settings_sends_only_the_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/settings/"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"settings": {}})))
            .expect(1)
            .mount(&server)
            .await;

        // Supplied parameters are dropped entirely for settings.
        let params = BrowseParams {
            include: Some("x".to_string()),
            fields: Some("title".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        client_for(&server)
            .browse(Resource::Settings, &params)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let query: Vec<(String, String)> = requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(query, vec![("key".to_string(), "test-key".to_string())]);
    }

    #[tokio::test]
    async fn test_read_by_slug_scenario() {
        // GET /posts/slug/hello-world/?fields=title,html returns the
        // mock body unchanged.
        let server = MockServer::start().await;
        let body = json!({"posts": [{"title": "Hello", "html": "<p>world</p>"}]});
        Mock::given(method("GET"))
            .and(path("/posts/slug/hello-world/"))
            .and(query_param("key", "test-key"))
            .and(query_param("fields", "title,html"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let params = ReadParams {
            fields: Some("title,html".to_string()),
            ..Default::default()
        };
        let result = client_for(&server)
            .read_by_slug(Resource::Posts, "hello-world", &params)
            .await
            .unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_read_by_id_builds_item_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tags/5f7b9c2e/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .read_by_id(Resource::Tags, "5f7b9c2e", &ReadParams::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_read_empty_identifier_fails_before_any_request() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let err = client
            .read_by_id(Resource::Posts, "", &ReadParams::default())
            .await
            .unwrap_err();
        assert!(err.is_invocation_error());

        let err = client
            .read_by_slug(Resource::Posts, "   ", &ReadParams::default())
            .await
            .unwrap_err();
        assert!(err.is_invocation_error());

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_rejected_for_browse_only_resources() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        for resource in [Resource::Tiers, Resource::Settings] {
            let err = client
                .read_by_id(resource, "abc", &ReadParams::default())
                .await
                .unwrap_err();
            assert!(err.is_invocation_error(), "{resource} read_by_id");

            let err = client
                .read_by_slug(resource, "abc", &ReadParams::default())
                .await
                .unwrap_err();
            assert!(err.is_invocation_error(), "{resource} read_by_slug");
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_surfaces_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/missing/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"message": "Resource not found error, cannot read post."}]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .read_by_id(Resource::Posts, "missing", &ReadParams::default())
            .await
            .unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Resource not found error, cannot read post.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upstream_error_falls_back_to_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tiers/"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .browse(Resource::Tiers, &BrowseParams::default())
            .await
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_a_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .browse(Resource::Posts, &BrowseParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_accept_version_header_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/"))
            .and(wiremock::matchers::header("Accept-Version", "v5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"posts": []})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .browse(Resource::Posts, &BrowseParams::default())
            .await
            .unwrap();
    }
}
