//! User groups service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::resilience::{DefaultRetryPolicy, Retrier};
use crate::transport::{HttpTransport, TransportRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for user groups service operations
#[async_trait]
pub trait UserGroupsServiceTrait: Send + Sync {
    /// List all user groups in a workspace
    async fn list(&self, request: ListUserGroupsRequest) -> SlackResult<ListUserGroupsResponse>;
}

/// User groups service implementation
#[derive(Clone)]
pub struct UserGroupsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
    retrier: Arc<Retrier>,
}

impl UserGroupsService {
    /// Create a new user groups service
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
impl UserGroupsServiceTrait for UserGroupsService {
    #[instrument(skip(self))]
    async fn list(&self, request: ListUserGroupsRequest) -> SlackResult<ListUserGroupsResponse> {
        let url = self.build_url("usergroups.list");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("usergroups.list", &DefaultRetryPolicy, || {
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
