// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::Message;
use crate::domain::presence::models::ChatState;
use crate::domain::shared::models::UserId;

/// Outbound realtime traffic. Broadcasts reach the peer immediately but
/// carry no durability guarantee; persistence goes through the
/// `MessageStoreService` first.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    async fn broadcast_message(&self, message: &Message) -> Result<()>;

    async fn send_chat_state(
        &self,
        sender: &UserId,
        receiver: &UserId,
        state: ChatState,
    ) -> Result<()>;
}
