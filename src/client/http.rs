use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

use super::KeyService;
use crate::constants::routes;
use crate::errors::ConsoleError;
use crate::models::{ApiKey, CreateKeyRequest, ErrorBody, ListKeysResponse};
use crate::utils::SecureString;

/// `KeyService` over the backend's JSON REST API
pub struct HttpKeyService {
    client: Client,
    base_url: Url,
    token: Option<SecureString>,
}

impl HttpKeyService {
    pub fn new(
        base_url: &str,
        token: Option<SecureString>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConsoleError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConsoleError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ConsoleError::Config(format!(
                "Base URL cannot be used as a base: {base_url}"
            )));
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConsoleError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/api/keys[/<segments>...]`, with each segment percent-encoded
    fn keys_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(routes::KEYS)
                .extend(segments);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.expose()),
            ),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ConsoleError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        debug!("⬅️  {} {}", status.as_u16(), response.url().path());

        if status.is_success() {
            return Ok(response);
        }
        Err(Self::status_error(response).await)
    }

    /// Turn a non-2xx response into a request error, keeping the backend's
    /// own error text for the logs
    async fn status_error(response: Response) -> ConsoleError {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
            {
                warn!("⏳ Rate limited by backend, retry after {}s", retry_after);
            }
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.describe())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });

        ConsoleError::Request {
            status: Some(status.as_u16()),
            message: format!("HTTP {}: {}", status.as_u16(), detail),
        }
    }
}

#[async_trait]
impl KeyService for HttpKeyService {
    async fn list_keys(&self) -> Result<Vec<ApiKey>, ConsoleError> {
        let url = self.keys_url(&[]);
        debug!("➡️  GET {}", url.path());
        let response = self.send(self.client.get(url)).await?;
        let body: ListKeysResponse = response.json().await?;
        Ok(body.keys)
    }

    async fn create_key(&self, name: &str) -> Result<(), ConsoleError> {
        let url = self.keys_url(&[]);
        debug!("➡️  POST {}", url.path());
        let body = CreateKeyRequest {
            name: name.to_string(),
        };
        self.send(self.client.post(url).json(&body)).await?;
        Ok(())
    }

    async fn delete_key(&self, id: &str) -> Result<(), ConsoleError> {
        let url = self.keys_url(&[id]);
        debug!("➡️  DELETE {}", url.path());
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn toggle_key(&self, id: &str) -> Result<(), ConsoleError> {
        let url = self.keys_url(&[id, routes::TOGGLE]);
        debug!("➡️  POST {}", url.path());
        self.send(self.client.post(url)).await?;
        Ok(())
    }
}
