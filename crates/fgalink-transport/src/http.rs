//! HTTP transport implementation over reqwest.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{TransportError, TransportResult};
use crate::traits::TupleTransport;
use crate::wire::{WriteRequestBody, WriteResponse};

/// Error body returned by the service on failure.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Transport that sends write requests to
/// `POST {api_url}/stores/{store_id}/write`.
#[derive(Debug)]
pub struct HttpTupleTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTupleTransport {
    /// Creates an HTTP transport from the given configuration.
    pub fn new(config: ClientConfig) -> TransportResult<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    fn write_url(&self, store_id: &str) -> String {
        format!(
            "{}/stores/{}/write",
            self.config.api_url.trim_end_matches('/'),
            store_id
        )
    }
}

/// Maps a non-success status and its (possibly unparseable) error body to
/// a transport error.
fn service_error(status: StatusCode, body: &[u8]) -> TransportError {
    let parsed: ApiErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let code = if parsed.code.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown")
            .to_lowercase()
            .replace(' ', "_")
    } else {
        parsed.code
    };
    TransportError::Service {
        status: status.as_u16(),
        code,
        message: parsed.message,
    }
}

#[async_trait]
impl TupleTransport for HttpTupleTransport {
    async fn send(
        &self,
        store_id: &str,
        request: &WriteRequestBody,
    ) -> TransportResult<WriteResponse> {
        let url = self.write_url(store_id);
        debug!(
            store_id = %store_id,
            tuple_count = request.tuple_count(),
            "sending write request"
        );

        let mut builder = self.client.post(&url).json(request);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(service_error(status, &body));
        }

        // The service replies with an empty JSON object; tolerate an
        // entirely empty body as well.
        if body.is_empty() {
            return Ok(WriteResponse::default());
        }
        serde_json::from_slice(&body).map_err(|e| TransportError::Decode {
            message: e.to_string(),
        })
    }
}
