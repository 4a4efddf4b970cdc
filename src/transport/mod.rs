//! HTTP transport layer for the tap client.
//!
//! Provides low-level HTTP communication with the Slack API, including
//! request building, response parsing, and error mapping. Rate limiting is
//! surfaced here as a structured error carrying the server-advised delay;
//! the retry layer decides what to do with it.

use crate::errors::{NetworkError, ResponseError, SlackError, SlackResult};
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport trait for making API requests.
///
/// The trait works on raw JSON values so it stays object-safe; the typed
/// [`send_json`](dyn HttpTransport::send_json) wrapper handles
/// serialization on both sides.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request with an optional JSON body, returning the parsed body
    async fn send(&self, request: TransportRequest<serde_json::Value>)
        -> SlackResult<serde_json::Value>;
}

impl dyn HttpTransport {
    /// Send a typed JSON request and deserialize the response
    pub async fn send_json<Req, Res>(&self, request: TransportRequest<Req>) -> SlackResult<Res>
    where
        Req: Serialize + Send + Sync,
        Res: DeserializeOwned,
    {
        let body = match request.body {
            Some(body) => Some(serde_json::to_value(body).map_err(|e| {
                SlackError::Response(ResponseError::DeserializationError {
                    message: e.to_string(),
                })
            })?),
            None => None,
        };

        let value = self
            .send(TransportRequest {
                method: request.method,
                url: request.url,
                headers: request.headers,
                body,
                timeout: request.timeout,
            })
            .await?;

        serde_json::from_value(value).map_err(|e| {
            SlackError::Response(ResponseError::DeserializationError {
                message: e.to_string(),
            })
        })
    }
}

/// Transport request for JSON payloads
#[derive(Debug)]
pub struct TransportRequest<T> {
    /// HTTP method
    pub method: Method,
    /// URL path
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<T>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl<T> TransportRequest<T> {
    /// Create a new GET request
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
            body: None,
            timeout: None,
        }
    }

    /// Create a new POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap, body: T) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body: Some(body),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    /// Parse the response and handle errors
    async fn parse_response(&self, response: Response) -> SlackResult<serde_json::Value> {
        let status = response.status();
        let retry_after = parse_retry_after(response.headers());

        // HTTP-level rate limiting short-circuits body parsing
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SlackError::from_slack_error(
                "ratelimited",
                None,
                Some(retry_after),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        debug!(response_body = %body, "Received response");

        let json: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            SlackError::Response(ResponseError::DeserializationError {
                message: e.to_string(),
            })
        })?;

        // Check for Slack "ok" field
        if let Some(ok) = json.get("ok").and_then(|v| v.as_bool()) {
            if !ok {
                let error_code = json
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown_error");
                // Slack puts human-readable context in "detail" (or
                // occasionally "message"), not in the code field
                let error_msg = json
                    .get("detail")
                    .and_then(|v| v.as_str())
                    .or_else(|| json.get("message").and_then(|v| v.as_str()));

                return Err(SlackError::from_slack_error(
                    error_code,
                    error_msg,
                    Some(retry_after),
                ));
            }
        }

        Ok(json)
    }
}

/// Parse the `Retry-After` header; absent or unparseable values are zero.
fn parse_retry_after(headers: &HeaderMap) -> Duration {
    headers
        .get("Retry-After")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::ZERO)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(
        &self,
        request: TransportRequest<serde_json::Value>,
    ) -> SlackResult<serde_json::Value> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut req_builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers)
            .timeout(timeout);

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        self.parse_response(response).await
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_transport_request_builder() {
        let headers = HeaderMap::new();
        let request: TransportRequest<()> =
            TransportRequest::get("https://slack.com/api/test", headers);

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://slack.com/api/test");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert("Retry-After", HeaderValue::from_static("30"));
        assert_eq!(parse_retry_after(&headers), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_retry_after_missing_is_zero() {
        assert_eq!(parse_retry_after(&HeaderMap::new()), Duration::ZERO);
    }

    #[test]
    fn test_parse_retry_after_unparseable_is_zero() {
        let mut headers = HeaderMap::new();
        headers.insert("Retry-After", HeaderValue::from_static("soon"));
        assert_eq!(parse_retry_after(&headers), Duration::ZERO);
    }
}
