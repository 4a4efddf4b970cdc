//! Mock implementations for testing.
//!
//! Provides a scripted transport and a recording sleeper so retry behavior
//! can be asserted without real network calls or elapsed time.

use crate::errors::{RateLimitError, ResponseError, SlackError, SlackResult};
use crate::resilience::Sleeper;
use crate::transport::{HttpTransport, TransportRequest};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// Delay before response
    pub delay_ms: Option<u64>,
    /// Error to return instead
    pub error: Option<SlackError>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self {
            body: serde_json::to_string(data).unwrap(),
            delay_ms: None,
            error: None,
        }
    }

    /// Create a successful response with raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            delay_ms: None,
            error: None,
        }
    }

    /// Create an error response
    pub fn error(error: SlackError) -> Self {
        Self {
            body: String::new(),
            delay_ms: None,
            error: Some(error),
        }
    }

    /// Create a Slack API error response (`ok: false` with the given code)
    pub fn slack_error(error_code: &str) -> Self {
        Self {
            body: format!(r#"{{"ok":false,"error":"{}"}}"#, error_code),
            delay_ms: None,
            error: None,
        }
    }

    /// Create a rate limit response with a server-advised delay
    pub fn rate_limited(retry_after: u64) -> Self {
        Self {
            body: r#"{"ok":false,"error":"ratelimited"}"#.to_string(),
            delay_ms: None,
            error: Some(SlackError::RateLimit(RateLimitError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            })),
        }
    }

    /// Add delay to response
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request method
    pub method: String,
    /// Request body (if JSON)
    pub body: Option<serde_json::Value>,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    /// Queue of responses to return
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Recorded requests
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Default response if queue is empty
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        let mut queue = self.responses.lock();
        for response in responses {
            queue.push_back(response);
        }
        drop(queue);
        self
    }

    /// Add a JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Set default response when queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(
        &self,
        request: TransportRequest<serde_json::Value>,
    ) -> SlackResult<serde_json::Value> {
        let header_vec: Vec<(String, String)> = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        self.requests.lock().push(RecordedRequest {
            url: request.url.clone(),
            method: request.method.to_string(),
            body: request.body,
            headers: header_vec,
        });

        let response = self.next_response().ok_or_else(|| {
            SlackError::Response(ResponseError::UnexpectedResponse {
                message: "No mock response configured".to_string(),
            })
        })?;

        if let Some(delay) = response.delay_ms {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if let Some(error) = response.error {
            return Err(error);
        }

        let json: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            SlackError::Response(ResponseError::DeserializationError {
                message: e.to_string(),
            })
        })?;

        // Mirror the real transport's "ok" check so scripted API errors
        // surface as structured errors, not deserialization failures
        if let Some(ok) = json.get("ok").and_then(|v| v.as_bool()) {
            if !ok {
                let error_code = json
                    .get("error")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown_error");

                return Err(SlackError::from_slack_error(
                    error_code,
                    None,
                    Some(Duration::ZERO),
                ));
            }
        }

        Ok(json)
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

/// Tracing subscriber that captures warning events, for asserting on the
/// log side effects of tolerated failures.
///
/// Install with `tracing::subscriber::set_default` and keep a clone to
/// read the captured warnings afterwards.
#[derive(Debug, Clone, Default)]
pub struct WarnCapture {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl WarnCapture {
    /// Create a new capture subscriber
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets of the warning events captured so far
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }

    /// Number of warning events captured so far
    pub fn warning_count(&self) -> usize {
        self.warnings.lock().len()
    }
}

impl tracing::Subscriber for WarnCapture {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        *metadata.level() == tracing::Level::WARN
    }

    fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _id: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _id: &tracing::span::Id, _follows: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.warnings
                .lock()
                .push(event.metadata().target().to_string());
        }
    }

    fn enter(&self, _id: &tracing::span::Id) {}

    fn exit(&self, _id: &tracing::span::Id) {}
}

/// Sleeper that records requested durations instead of waiting
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    recorded: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Create a new recording sleeper
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the durations requested so far
    pub fn recorded(&self) -> Vec<Duration> {
        self.recorded.lock().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.recorded.lock().push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChannelError;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct TestResponse {
        ok: bool,
        value: String,
    }

    fn as_transport(mock: MockHttpTransport) -> Arc<dyn HttpTransport> {
        Arc::new(mock)
    }

    #[tokio::test]
    async fn test_mock_transport_json() {
        let transport = as_transport(MockHttpTransport::new().add_json_response(&TestResponse {
            ok: true,
            value: "test".to_string(),
        }));

        let request =
            TransportRequest::<()>::get("https://slack.com/api/test", http::HeaderMap::new());

        let response: TestResponse = transport.send_json(request).await.unwrap();
        assert!(response.ok);
        assert_eq!(response.value, "test");
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let mock = MockHttpTransport::new().with_default_response(MockResponse::ok(r#"{"ok":true}"#));
        let requests = mock.requests.clone();
        let transport = as_transport(mock);

        let request =
            TransportRequest::<()>::get("https://slack.com/api/test", http::HeaderMap::new());

        let _: serde_json::Value = transport.send_json(request).await.unwrap();

        let recorded = requests.lock().clone();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].url, "https://slack.com/api/test");
    }

    #[tokio::test]
    async fn test_mock_transport_maps_slack_errors() {
        let transport = as_transport(
            MockHttpTransport::new().add_response(MockResponse::slack_error("not_in_channel")),
        );

        let request =
            TransportRequest::<()>::get("https://slack.com/api/test", http::HeaderMap::new());

        let result: SlackResult<serde_json::Value> = transport.send_json(request).await;
        assert!(matches!(
            result,
            Err(SlackError::Channel(ChannelError::NotInChannel))
        ));
    }

    #[test]
    fn test_warn_capture_counts_only_warnings() {
        let capture = WarnCapture::new();
        let _guard = tracing::subscriber::set_default(capture.clone());

        tracing::debug!("quiet");
        tracing::warn!("loud");
        tracing::warn!("louder");

        assert_eq!(capture.warning_count(), 2);
    }

    #[tokio::test]
    async fn test_recording_sleeper() {
        let sleeper = RecordingSleeper::new();
        sleeper.sleep(Duration::from_secs(3)).await;
        sleeper.sleep(Duration::from_secs(7)).await;

        assert_eq!(
            sleeper.recorded(),
            vec![Duration::from_secs(3), Duration::from_secs(7)]
        );
    }
}
