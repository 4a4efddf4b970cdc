//! Conversations service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::resilience::{DefaultRetryPolicy, Retrier};
use crate::transport::{HttpTransport, TransportRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for conversations service operations
#[async_trait]
pub trait ConversationsServiceTrait: Send + Sync {
    /// List conversations
    async fn list(&self, request: ListConversationsRequest)
        -> SlackResult<ListConversationsResponse>;

    /// Get conversation info
    async fn info(&self, request: ConversationInfoRequest) -> SlackResult<ConversationInfoResponse>;

    /// List conversation members
    async fn members(
        &self,
        request: ConversationMembersRequest,
    ) -> SlackResult<ConversationMembersResponse>;

    /// Get conversation history
    async fn history(
        &self,
        request: ConversationHistoryRequest,
    ) -> SlackResult<ConversationHistoryResponse>;

    /// Get thread replies
    async fn replies(
        &self,
        request: ConversationRepliesRequest,
    ) -> SlackResult<ConversationRepliesResponse>;

    /// Join a public channel
    async fn join(&self, request: JoinConversationRequest) -> SlackResult<JoinConversationResponse>;
}

/// Conversations service implementation
#[derive(Clone)]
pub struct ConversationsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
    retrier: Arc<Retrier>,
}

impl ConversationsService {
    /// Create a new conversations service
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
impl ConversationsServiceTrait for ConversationsService {
    #[instrument(skip(self))]
    async fn list(
        &self,
        request: ListConversationsRequest,
    ) -> SlackResult<ListConversationsResponse> {
        let url = self.build_url("conversations.list");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("conversations.list", &DefaultRetryPolicy, || {
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

    #[instrument(skip(self), fields(channel = %request.channel))]
    async fn info(&self, request: ConversationInfoRequest) -> SlackResult<ConversationInfoResponse> {
        let url = self.build_url("conversations.info");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("conversations.info", &DefaultRetryPolicy, || {
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

    #[instrument(skip(self), fields(channel = %request.channel))]
    async fn members(
        &self,
        request: ConversationMembersRequest,
    ) -> SlackResult<ConversationMembersResponse> {
        let url = self.build_url("conversations.members");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("conversations.members", &DefaultRetryPolicy, || {
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

    #[instrument(skip(self), fields(channel = %request.channel))]
    async fn history(
        &self,
        request: ConversationHistoryRequest,
    ) -> SlackResult<ConversationHistoryResponse> {
        let url = self.build_url("conversations.history");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("conversations.history", &DefaultRetryPolicy, || {
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

    #[instrument(skip(self), fields(channel = %request.channel, ts = %request.ts))]
    async fn replies(
        &self,
        request: ConversationRepliesRequest,
    ) -> SlackResult<ConversationRepliesResponse> {
        let url = self.build_url("conversations.replies");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("conversations.replies", &DefaultRetryPolicy, || {
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

    #[instrument(skip(self), fields(channel = %request.channel))]
    async fn join(&self, request: JoinConversationRequest) -> SlackResult<JoinConversationResponse> {
        let url = self.build_url("conversations.join");
        let headers = self.auth.get_headers()?;
        let transport = self.transport.clone();

        self.retrier
            .run("conversations.join", &DefaultRetryPolicy, || {
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
