// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parley_socket::ConnectionError;

use crate::domain::messaging::models::MessagePayload;
use crate::domain::presence::models::ChatState;
use crate::domain::shared::models::UserId;

/// A transport event translated into domain terms, ready for the handler
/// queue.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Connection(ConnectionEvent),
    Message(MessageEvent),
    UserStatus(UserStatusEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}

/// A `private-message` packet relayed to us by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub payload: MessagePayload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatusEvent {
    pub user_id: UserId,
    pub state: ChatState,
}
