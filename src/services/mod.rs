//! Service implementations for the Slack API endpoints the tap polls.
//!
//! Each service module provides methods for one category of endpoints,
//! all executed under the shared retry policy.

pub mod conversations;
pub mod files;
pub mod team;
pub mod usergroups;
pub mod users;

pub use conversations::ConversationsService;
pub use files::FilesService;
pub use team::TeamService;
pub use usergroups::UserGroupsService;
pub use users::UsersService;
