//! Greeting service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, GreetRequestBody, GreetResponseBody};
use crate::domain::entities::Greeting;
use crate::domain::errors::GreetError;
use crate::domain::ports::GreetingPort;

const USER_AGENT: &str = concat!("greeter/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-over-HTTP adapter for the remote greeting service.
pub struct HttpGreetingClient {
    client: Client,
    endpoint: String,
}

impl HttpGreetingClient {
    /// Creates client for the endpoint with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GreetError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Creates client with a custom per-request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GreetError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GreetError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint.trim_end_matches('/'))
    }

    fn transport_error(e: &reqwest::Error) -> GreetError {
        if e.is_timeout() {
            GreetError::Timeout
        } else if e.is_connect() {
            GreetError::network("failed to connect to greeting service")
        } else {
            GreetError::network(e.to_string())
        }
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> GreetError {
        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                GreetError::network("greeting service is temporarily unavailable")
            }
            s if s.is_client_error() || s.is_server_error() => {
                GreetError::remote_fault(Some(s.as_u16()), error_message)
            }
            _ => GreetError::unexpected(format!("unexpected response: {status} - {error_message}")),
        }
    }
}

#[async_trait]
impl GreetingPort for HttpGreetingClient {
    async fn greet(&self, name: &str) -> Result<Greeting, GreetError> {
        let url = self.url("greet");

        debug!(%url, "Sending greet request");

        let response = self
            .client
            .post(&url)
            .json(&GreetRequestBody { name })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach greeting service");
                Self::transport_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body: GreetResponseBody = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse greet response");
            if e.is_timeout() {
                GreetError::Timeout
            } else {
                GreetError::invalid_response(e.to_string())
            }
        })?;

        Ok(Greeting::new(body.message))
    }

    async fn health_check(&self) -> Result<(), GreetError> {
        let url = self.url("health");

        debug!(%url, "Performing greeting service health check");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GreetError::network(format!(
                "greeting service returned {}",
                response.status()
            )))
        }
    }
}
