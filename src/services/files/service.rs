//! Files service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::resilience::{DefaultRetryPolicy, Retrier};
use crate::transport::{HttpTransport, TransportRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for files service operations
#[async_trait]
pub trait FilesServiceTrait: Send + Sync {
    /// List files uploaded to the workspace
    async fn list(&self, request: ListFilesRequest) -> SlackResult<ListFilesResponse>;

    /// List remote files registered with the workspace
    async fn list_remote(
        &self,
        request: ListRemoteFilesRequest,
    ) -> SlackResult<ListRemoteFilesResponse>;
}

/// Files service implementation
#[derive(Clone)]
pub struct FilesService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
    retrier: Arc<Retrier>,
}

impl FilesService {
    /// Create a new files service
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
impl FilesServiceTrait for FilesService {
    #[instrument(skip(self))]
    async fn list(&self, request: ListFilesRequest) -> SlackResult<ListFilesResponse> {
        let url = self.build_url("files.list");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("files.list", &DefaultRetryPolicy, || {
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

    #[instrument(skip(self))]
    async fn list_remote(
        &self,
        request: ListRemoteFilesRequest,
    ) -> SlackResult<ListRemoteFilesResponse> {
        let url = self.build_url("files.remote.list");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("files.remote.list", &DefaultRetryPolicy, || {
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
