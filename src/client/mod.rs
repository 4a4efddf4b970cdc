//! Tap client implementation.
//!
//! Provides the main entry point for pulling Slack data. The high-level
//! operations mirror what an extraction run needs: enumerate channels,
//! users, user groups and files, then walk message history and threads
//! per channel. Two error codes are tolerated here rather than propagated,
//! because a sync run must keep going when a single channel is unreadable:
//!
//! - `fetch_members_failed` degrades to an empty member list
//! - `not_in_channel` degrades to an absent history window

use crate::auth::AuthManager;
use crate::config::TapConfig;
use crate::errors::{ChannelError, SlackError, SlackResult};
use crate::resilience::{Retrier, RetryConfig, Sleeper};
use crate::services::conversations::{
    ConversationHistoryRequest, ConversationHistoryResponse, ConversationInfoRequest,
    ConversationMembersRequest, ConversationRepliesRequest, ConversationRepliesResponse,
    ConversationsService, ConversationsServiceTrait, JoinConversationRequest,
    JoinConversationResponse, ListConversationsRequest, ListConversationsResponse,
};
use crate::services::files::{
    FilesService, FilesServiceTrait, ListFilesRequest, ListFilesResponse, ListRemoteFilesRequest,
    ListRemoteFilesResponse,
};
use crate::services::team::{TeamInfoRequest, TeamService, TeamServiceTrait};
use crate::services::usergroups::{
    ListUserGroupsRequest, UserGroupsService, UserGroupsServiceTrait,
};
use crate::services::users::{ListUsersRequest, ListUsersResponse, UsersService, UsersServiceTrait};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{Channel, ChannelId, ChannelType, Team, Timestamp, UserGroup, UserId};
use std::sync::Arc;
use tracing::warn;

/// Main tap client
#[derive(Clone)]
pub struct SlackTapClient {
    config: Arc<TapConfig>,
    auth: AuthManager,
    conversations_service: ConversationsService,
    users_service: UsersService,
    usergroups_service: UserGroupsService,
    team_service: TeamService,
    files_service: FilesService,
}

impl SlackTapClient {
    /// Create a new tap client with the given configuration
    pub fn new(config: TapConfig) -> SlackResult<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a tap client with a custom transport
    pub fn with_transport(
        config: TapConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SlackResult<Self> {
        config.validate()?;

        let retrier = Arc::new(Retrier::new(
            RetryConfig::new()
                .max_tries(config.backoff_max_tries)
                .interval(config.backoff_interval),
        ));

        Ok(Self::assemble(config, transport, retrier))
    }

    /// Create a tap client with a custom transport and sleep mechanism
    pub fn with_transport_and_sleeper(
        config: TapConfig,
        transport: Arc<dyn HttpTransport>,
        sleeper: Arc<dyn Sleeper>,
    ) -> SlackResult<Self> {
        config.validate()?;

        let retrier = Arc::new(
            Retrier::new(
                RetryConfig::new()
                    .max_tries(config.backoff_max_tries)
                    .interval(config.backoff_interval),
            )
            .with_sleeper(sleeper),
        );

        Ok(Self::assemble(config, transport, retrier))
    }

    fn assemble(
        config: TapConfig,
        transport: Arc<dyn HttpTransport>,
        retrier: Arc<Retrier>,
    ) -> Self {
        let config = Arc::new(config);
        let auth = AuthManager::new(config.clone());
        let base_url = config.base_url.as_str().trim_end_matches('/').to_string();

        let conversations_service = ConversationsService::new(
            transport.clone(),
            auth.clone(),
            base_url.clone(),
            retrier.clone(),
        );
        let users_service = UsersService::new(
            transport.clone(),
            auth.clone(),
            base_url.clone(),
            retrier.clone(),
        );
        let usergroups_service = UserGroupsService::new(
            transport.clone(),
            auth.clone(),
            base_url.clone(),
            retrier.clone(),
        );
        let team_service = TeamService::new(
            transport.clone(),
            auth.clone(),
            base_url.clone(),
            retrier.clone(),
        );
        let files_service = FilesService::new(transport, auth.clone(), base_url, retrier);

        Self {
            config,
            auth,
            conversations_service,
            users_service,
            usergroups_service,
            team_service,
            files_service,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Get the authentication manager
    pub fn auth_manager(&self) -> &AuthManager {
        &self.auth
    }

    /// Get the conversations service
    pub fn conversations(&self) -> &dyn ConversationsServiceTrait {
        &self.conversations_service
    }

    /// Get the users service
    pub fn users(&self) -> &dyn UsersServiceTrait {
        &self.users_service
    }

    /// Get the user groups service
    pub fn usergroups(&self) -> &dyn UserGroupsServiceTrait {
        &self.usergroups_service
    }

    /// Get the team service
    pub fn team(&self) -> &dyn TeamServiceTrait {
        &self.team_service
    }

    /// Get the files service
    pub fn files(&self) -> &dyn FilesServiceTrait {
        &self.files_service
    }

    /// List one page of channels of the given types
    pub async fn channels_list(
        &self,
        types: &[ChannelType],
        exclude_archived: bool,
        cursor: Option<&str>,
    ) -> SlackResult<ListConversationsResponse> {
        let mut request = ListConversationsRequest::new()
            .types(types)
            .exclude_archived(exclude_archived);
        if let Some(cursor) = cursor {
            request = request.cursor(cursor);
        }

        self.conversations_service.list(request).await
    }

    /// Get a single channel, unwrapped from its response envelope
    pub async fn channel_info(&self, channel: impl Into<ChannelId>) -> SlackResult<Channel> {
        let request = ConversationInfoRequest::new(channel).include_num_members(true);
        let response = self.conversations_service.info(request).await?;
        Ok(response.channel)
    }

    /// Get all member IDs for a channel, following pagination.
    ///
    /// Slack sometimes cannot produce a member list for a channel
    /// (`fetch_members_failed`); the sync must not die on that, so the
    /// channel degrades to an empty member list with a warning.
    pub async fn channel_members(&self, channel: impl Into<ChannelId>) -> SlackResult<Vec<UserId>> {
        let channel = channel.into();
        let mut members = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = ConversationMembersRequest::new(channel.clone());
            if let Some(ref c) = cursor {
                request = request.cursor(c.as_str());
            }

            let response = match self.conversations_service.members(request).await {
                Ok(response) => response,
                Err(SlackError::Channel(ChannelError::FetchMembersFailed)) => {
                    warn!(channel = %channel, "Could not fetch members, continuing with none");
                    return Ok(Vec::new());
                }
                Err(e) => return Err(e),
            };

            members.extend(response.members.iter().cloned());

            match response.next_cursor() {
                Some(next) => cursor = Some(next.to_string()),
                None => break,
            }
        }

        Ok(members)
    }

    /// Get one page of message history for a channel within a time window.
    ///
    /// Returns `None` when the bot is not a member of the channel
    /// (`not_in_channel`); private channels the bot was never invited to
    /// show up in listings but their history is unreadable.
    pub async fn channel_messages(
        &self,
        channel: impl Into<ChannelId>,
        oldest: Option<Timestamp>,
        latest: Option<Timestamp>,
        cursor: Option<&str>,
    ) -> SlackResult<Option<ConversationHistoryResponse>> {
        let channel = channel.into();
        let mut request = ConversationHistoryRequest::new(channel.clone());
        if let Some(oldest) = oldest {
            request = request.oldest(oldest);
        }
        if let Some(latest) = latest {
            request = request.latest(latest);
        }
        if let Some(cursor) = cursor {
            request = request.cursor(cursor);
        }

        match self.conversations_service.history(request).await {
            Ok(response) => Ok(Some(response)),
            Err(SlackError::Channel(ChannelError::NotInChannel)) => {
                warn!(channel = %channel, "Not in channel, skipping message history");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Get one page of replies for a thread
    pub async fn thread_replies(
        &self,
        channel: impl Into<ChannelId>,
        ts: impl Into<Timestamp>,
        inclusive: bool,
        oldest: Option<Timestamp>,
        latest: Option<Timestamp>,
        cursor: Option<&str>,
    ) -> SlackResult<ConversationRepliesResponse> {
        let mut request = ConversationRepliesRequest::new(channel, ts).inclusive(inclusive);
        if let Some(oldest) = oldest {
            request = request.oldest(oldest);
        }
        if let Some(latest) = latest {
            request = request.latest(latest);
        }
        if let Some(cursor) = cursor {
            request = request.cursor(cursor);
        }

        self.conversations_service.replies(request).await
    }

    /// Join a public channel so its history becomes readable
    pub async fn join_channel(
        &self,
        channel: impl Into<ChannelId>,
    ) -> SlackResult<JoinConversationResponse> {
        self.conversations_service
            .join(JoinConversationRequest::new(channel))
            .await
    }

    /// List one page of workspace users
    pub async fn users_list(
        &self,
        limit: Option<i32>,
        cursor: Option<&str>,
    ) -> SlackResult<ListUsersResponse> {
        let mut request = ListUsersRequest::new();
        if let Some(limit) = limit {
            request = request.limit(limit);
        }
        if let Some(cursor) = cursor {
            request = request.cursor(cursor);
        }

        self.users_service.list(request).await
    }

    /// List all user groups in the workspace
    pub async fn usergroups_list(
        &self,
        include_count: bool,
        include_disabled: bool,
        include_users: bool,
    ) -> SlackResult<Vec<UserGroup>> {
        let request = ListUserGroupsRequest::new()
            .include_count(include_count)
            .include_disabled(include_disabled)
            .include_users(include_users);

        let response = self.usergroups_service.list(request).await?;
        Ok(response.usergroups)
    }

    /// Get the workspace team, unwrapped from its response envelope
    pub async fn team_info(&self) -> SlackResult<Team> {
        let response = self.team_service.info(TeamInfoRequest::new()).await?;
        Ok(response.team)
    }

    /// List one page of files created within a time window
    pub async fn files_list(
        &self,
        ts_from: Option<Timestamp>,
        ts_to: Option<Timestamp>,
        page: Option<u32>,
    ) -> SlackResult<ListFilesResponse> {
        let mut request = ListFilesRequest::new();
        if let Some(ts) = ts_from {
            request = request.ts_from(ts);
        }
        if let Some(ts) = ts_to {
            request = request.ts_to(ts);
        }
        if let Some(page) = page {
            request = request.page(page);
        }

        self.files_service.list(request).await
    }

    /// List one page of remote files created within a time window
    pub async fn remote_files_list(
        &self,
        ts_from: Option<Timestamp>,
        ts_to: Option<Timestamp>,
        cursor: Option<&str>,
    ) -> SlackResult<ListRemoteFilesResponse> {
        let mut request = ListRemoteFilesRequest::new();
        if let Some(ts) = ts_from {
            request = request.ts_from(ts);
        }
        if let Some(ts) = ts_to {
            request = request.ts_to(ts);
        }
        if let Some(cursor) = cursor {
            request = request.cursor(cursor);
        }

        self.files_service.list_remote(request).await
    }
}

impl std::fmt::Debug for SlackTapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackTapClient")
            .field("config", &self.config)
            .finish()
    }
}
