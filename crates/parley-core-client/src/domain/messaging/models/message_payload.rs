// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

use super::{DeliveryState, Message, MessageId};

/// Wire representation of a `private-message` packet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Older servers sent the body under `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MessagePayloadError {
    #[error("Message payload is missing a body")]
    MissingBody,
    #[error("Sender and receiver of a message must differ")]
    InvalidParticipants,
}

impl MessagePayload {
    pub fn body(&self) -> Option<&str> {
        self.message.as_deref().or(self.text.as_deref())
    }

    /// Converts the payload into a message as relayed by the server, i.e.
    /// one that has been persisted on the sender's side.
    pub fn into_message(self) -> Result<Message, MessagePayloadError> {
        if self.sender_id == self.receiver_id {
            return Err(MessagePayloadError::InvalidParticipants);
        }
        let body = self
            .body()
            .map(str::trim)
            .filter(|body| !body.is_empty())
            .ok_or(MessagePayloadError::MissingBody)?
            .to_string();

        Ok(Message {
            id: self.id,
            sender: self.sender_id,
            receiver: self.receiver_id,
            body,
            timestamp: self.timestamp,
            state: DeliveryState::Confirmed,
        })
    }
}

impl From<&Message> for MessagePayload {
    fn from(message: &Message) -> Self {
        MessagePayload {
            id: message.id.clone(),
            sender_id: message.sender.clone(),
            receiver_id: message.receiver.clone(),
            message: Some(message.body.clone()),
            text: None,
            timestamp: message.timestamp,
        }
    }
}
