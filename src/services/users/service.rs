//! Users service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::resilience::{DefaultRetryPolicy, Retrier};
use crate::transport::{HttpTransport, TransportRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for users service operations
#[async_trait]
pub trait UsersServiceTrait: Send + Sync {
    /// List all users in a workspace
    async fn list(&self, request: ListUsersRequest) -> SlackResult<ListUsersResponse>;
}

/// Users service implementation
#[derive(Clone)]
pub struct UsersService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
    retrier: Arc<Retrier>,
}

impl UsersService {
    /// Create a new users service
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
impl UsersServiceTrait for UsersService {
    #[instrument(skip(self))]
    async fn list(&self, request: ListUsersRequest) -> SlackResult<ListUsersResponse> {
        let url = self.build_url("users.list");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("users.list", &DefaultRetryPolicy, || {
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
