// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::UserId;
use crate::domain::unread::models::UnreadCounts;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum MessageStoreError {
    #[error("Authorization failed")]
    Unauthorized,
    #[error("Request failed: {msg}")]
    Request { msg: String },
    #[error("Unexpected response shape: {msg}")]
    MalformedResponse { msg: String },
}

/// The remote Message Store API. The server is the source of truth for
/// message ids, timestamps and unread counts.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessageStoreService: Send + Sync {
    /// The persisted history of our conversation with `with`.
    async fn load_history(&self, with: &UserId) -> Result<Vec<Message>, MessageStoreError>;

    /// Persists a message addressed to `receiver`. The returned message
    /// carries the server-assigned id and timestamp.
    async fn save_message(
        &self,
        receiver: &UserId,
        body: &str,
    ) -> Result<Message, MessageStoreError>;

    async fn load_unread_counts(&self) -> Result<UnreadCounts, MessageStoreError>;

    /// Acknowledges all messages from `peer` as read.
    async fn mark_read(&self, peer: &UserId) -> Result<(), MessageStoreError>;
}
