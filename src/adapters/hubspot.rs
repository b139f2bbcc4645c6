use crate::domain::model::{CreatePayload, NewRecord, Record, RemoteObject, RemotePage, RECORD_PROPERTIES};
use crate::domain::ports::{ConfigProvider, RecordStore};
use crate::utils::error::{PortalError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub const HUBSPOT_BASE_URL: &str = "https://api.hubapi.com";

/// Applies to the whole exchange, for reads and writes alike.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);

/// CRM objects API client for a single object type.
#[derive(Debug, Clone)]
pub struct HubSpotClient {
    client: Client,
    collection_url: Url,
}

impl HubSpotClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_endpoint(HUBSPOT_BASE_URL, config, REQUEST_TIMEOUT)
    }

    pub fn with_endpoint<C: ConfigProvider>(
        base_url: &str,
        config: &C,
        timeout: Duration,
    ) -> Result<Self> {
        let collection_url = collection_url(base_url, config.object_type())?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token()))
            .map_err(|_| PortalError::InvalidConfigValueError {
                field: "hubspot_token".to_string(),
                value: String::new(),
                reason: "Token contains characters that are not valid in a header".to_string(),
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PortalError::InvalidConfigValueError {
                field: "http_client".to_string(),
                value: String::new(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("HubSpot response status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PortalError::remote_status(status.as_u16(), detail));
        }

        Ok(response.json::<T>().await?)
    }
}

fn collection_url(base_url: &str, object_type: &str) -> Result<Url> {
    let mut url = validate_url("base_url", base_url)?;
    url.path_segments_mut()
        .map_err(|_| PortalError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        })?
        .pop_if_empty()
        .extend(["crm", "v3", "objects", object_type]);
    Ok(url)
}

#[async_trait]
impl RecordStore for HubSpotClient {
    async fn list_records(&self, limit: u32) -> Result<Vec<Record>> {
        let limit = limit.max(1);
        tracing::debug!("Listing up to {} records from {}", limit, self.collection_url);

        let response = self
            .client
            .get(self.collection_url.clone())
            .query(&[
                ("properties", RECORD_PROPERTIES.join(",")),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        let page: RemotePage = Self::read_json(response).await?;
        tracing::debug!("Fetched {} records", page.results.len());

        Ok(page.results.into_iter().map(Record::from).collect())
    }

    async fn create_record(&self, input: &NewRecord) -> Result<Record> {
        tracing::debug!("Creating record at {}", self.collection_url);

        let response = self
            .client
            .post(self.collection_url.clone())
            .json(&CreatePayload { properties: input })
            .send()
            .await?;

        let created: RemoteObject = Self::read_json(response).await?;
        tracing::info!("Created record {}", created.id);

        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    struct MockConfig {
        token: String,
        object_type: String,
    }

    impl MockConfig {
        fn new(object_type: &str) -> Self {
            Self {
                token: "pat-test-token".to_string(),
                object_type: object_type.to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn access_token(&self) -> &str {
            &self.token
        }

        fn object_type(&self) -> &str {
            &self.object_type
        }
    }

    fn client_for(server: &MockServer, object_type: &str) -> HubSpotClient {
        HubSpotClient::with_endpoint(
            &server.base_url(),
            &MockConfig::new(object_type),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_default_endpoint() {
        let client = HubSpotClient::new(&MockConfig::new("2-123456")).unwrap();
        assert_eq!(
            client.collection_url().as_str(),
            "https://api.hubapi.com/crm/v3/objects/2-123456"
        );
    }

    #[test]
    fn test_object_type_is_escaped_into_path() {
        let client = HubSpotClient::with_endpoint(
            "http://localhost:8080/",
            &MockConfig::new("p_pets/../deals"),
            REQUEST_TIMEOUT,
        )
        .unwrap();
        assert_eq!(
            client.collection_url().as_str(),
            "http://localhost:8080/crm/v3/objects/p_pets%2F..%2Fdeals"
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = HubSpotClient::with_endpoint(
            "ftp://api.hubapi.com",
            &MockConfig::new("2-123456"),
            REQUEST_TIMEOUT,
        );
        assert!(matches!(
            result,
            Err(PortalError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_records_sends_properties_limit_and_auth() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/crm/v3/objects/2-123456")
                .query_param("properties", "name,bio,category")
                .query_param("limit", "50")
                .header("authorization", "Bearer pat-test-token")
                .header("content-type", "application/json");
            then.status(200).json_body(json!({
                "results": [
                    {"id": "1", "properties": {"name": "Ada", "bio": "Pioneer", "category": "Person"}},
                    {"id": "2", "properties": {"name": "Grace", "bio": "Compilers", "category": "Person"}}
                ]
            }));
        });

        let client = client_for(&server, "2-123456");
        let records = client.list_records(50).await.unwrap();

        api_mock.assert();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].name, "Ada");
        assert_eq!(records[1].id, "2");
        assert_eq!(records[1].bio, "Compilers");
    }

    #[tokio::test]
    async fn test_list_records_zero_limit_asks_for_one() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/crm/v3/objects/2-123456")
                .query_param("limit", "1");
            then.status(200).json_body(json!({ "results": [] }));
        });

        let client = client_for(&server, "2-123456");
        let records = client.list_records(0).await.unwrap();

        api_mock.assert();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_records_missing_results_is_empty() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/crm/v3/objects/2-123456");
            then.status(200).json_body(json!({}));
        });

        let client = client_for(&server, "2-123456");
        let records = client.list_records(10).await.unwrap();

        api_mock.assert();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_records_client_error_is_remote_unavailable() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/crm/v3/objects/2-123456");
            then.status(401).json_body(json!({
                "status": "error",
                "message": "Authentication credentials not found."
            }));
        });

        let client = client_for(&server, "2-123456");
        let err = client.list_records(50).await.unwrap_err();

        api_mock.assert();
        match err {
            PortalError::RemoteUnavailable { status, detail } => {
                assert_eq!(status, Some(401));
                assert!(detail.contains("Authentication credentials not found."));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_record_posts_properties() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/crm/v3/objects/2-123456")
                .header("authorization", "Bearer pat-test-token")
                .json_body(json!({
                    "properties": {"name": "Ada", "bio": "Pioneer", "category": "Person"}
                }));
            then.status(201).json_body(json!({
                "id": "512",
                "properties": {"name": "Ada", "bio": "Pioneer", "category": "Person"},
                "archived": false
            }));
        });

        let client = client_for(&server, "2-123456");
        let record = client
            .create_record(&NewRecord::new("Ada", "Pioneer", "Person"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(record.id, "512");
        assert_eq!(record.name, "Ada");
        assert_eq!(record.bio, "Pioneer");
        assert_eq!(record.category, "Person");
    }

    #[tokio::test]
    async fn test_create_record_server_error_is_remote_unavailable() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/crm/v3/objects/2-123456");
            then.status(500);
        });

        let client = client_for(&server, "2-123456");
        let err = client
            .create_record(&NewRecord::new("Ada", "Pioneer", "Person"))
            .await
            .unwrap_err();

        api_mock.assert();
        assert!(err.is_remote_unavailable());
    }
}
