//! HTTP Transport
//!
//! Carries unary calls as JSON over HTTP: `POST {base}/rpc/{method}`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::TransportError;
use crate::transport::Transport;

/// Blocking HTTP transport bound to one backend address.
///
/// Uses a blocking client, so it must be built, used and dropped outside of
/// an async executor (e.g. inside `tokio::task::spawn_blocking`).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for `http://{host}:{port}` with a per-call timeout.
    pub fn new(host: &str, port: u16, timeout: Duration) -> Result<Self, TransportError> {
        Self::with_base_url(format!("http://{}:{}", host, port), timeout)
    }

    /// Creates a transport for an explicit base URL.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the URL a method is posted to.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/rpc/{}", self.base_url, method)
    }
}

impl Transport for HttpTransport {
    fn invoke(&self, method: &str, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        let url = self.method_url(method);
        debug!(url = %url, "Sending unary call");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(request.to_vec())
            .send()
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}
