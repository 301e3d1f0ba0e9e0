// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_socket::ConnectionError;

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the connection has changed.
    ConnectionStatusChanged { event: ConnectionEvent },

    /// Contents of the conversation with `peer` have changed.
    ConversationChanged {
        peer: UserId,
        r#type: ConversationEventType,
    },

    /// The number of unread messages has changed for at least one peer.
    UnreadCountsChanged,

    /// `peer` started or stopped typing.
    TypingStateChanged { peer: UserId, is_typing: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connect,
    Disconnect { error: Option<ConnectionError> },
    /// All reconnect attempts were exhausted. A manual `connect` is
    /// required from here on.
    ConnectionLost,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEventType {
    /// One or more messages were appended.
    MessagesAppended { message_ids: Vec<MessageId> },
    /// One or more messages changed in place, e.g. their delivery state.
    MessagesUpdated { message_ids: Vec<MessageId> },
    /// The conversation changed wholesale and should be re-read.
    MessagesNeedReload,
    /// Loading the conversation's history failed.
    LoadFailed,
}
