//! Team service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::resilience::{DefaultRetryPolicy, Retrier};
use crate::transport::{HttpTransport, TransportRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for team service operations
#[async_trait]
pub trait TeamServiceTrait: Send + Sync {
    /// Get information about the workspace team
    async fn info(&self, request: TeamInfoRequest) -> SlackResult<TeamInfoResponse>;
}

/// Team service implementation
#[derive(Clone)]
pub struct TeamService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
    retrier: Arc<Retrier>,
}

impl TeamService {
    /// Create a new team service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: AuthManager,
        base_url: String,
        retrier: Arc<Retrier>,
    ) -> Self {
        Self {
            transport,
            auth,
            base_url,
            retrier,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl TeamServiceTrait for TeamService {
    #[instrument(skip(self))]
    async fn info(&self, request: TeamInfoRequest) -> SlackResult<TeamInfoResponse> {
        let url = self.build_url("team.info");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("team.info", &DefaultRetryPolicy, || {
                let url = url.clone();
                let headers = headers.clone();
                let request = request.clone();
                let transport = transport.clone();
                async move {
                    transport
                        .send_json(TransportRequest::post(url, headers, request))
                        .await
                }
            })
            .await
    }
}
