// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use parley_utils::id_string;

use crate::domain::shared::models::UserId;

use super::ConversationId;

id_string!(
    /// Identifies a message. Server-assigned once persisted; the send
    /// pipeline hands out provisional `temp-` prefixed ids before that.
    MessageId
);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryState {
    /// Staged locally, persistence still in flight.
    Pending,
    /// Durably stored, carries the server-assigned id and timestamp.
    Confirmed,
    /// Persistence failed. The body is preserved for a retry.
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub sender: UserId,
    pub receiver: UserId,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub state: DeliveryState,
}

/// Key under which a message is deduplicated. Confirmed messages have a
/// stable server id; everything else falls back to a composite of the
/// fields that identify the send.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Id(MessageId),
    Composite {
        sender: UserId,
        receiver: UserId,
        timestamp: DateTime<Utc>,
        body: String,
    },
}

impl Message {
    pub fn conversation_id(&self) -> ConversationId {
        ConversationId::new(self.sender.clone(), self.receiver.clone())
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == DeliveryState::Confirmed
    }

    pub fn dedup_key(&self) -> MessageKey {
        match self.state {
            DeliveryState::Confirmed => MessageKey::Id(self.id.clone()),
            DeliveryState::Pending | DeliveryState::Failed => MessageKey::Composite {
                sender: self.sender.clone(),
                receiver: self.receiver.clone(),
                timestamp: self.timestamp,
                body: self.body.clone(),
            },
        }
    }
}
