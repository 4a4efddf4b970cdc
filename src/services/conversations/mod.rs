//! Conversations service for the Slack API.
//!
//! Covers channel listing, channel detail, membership, history, thread
//! replies, and joining.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
