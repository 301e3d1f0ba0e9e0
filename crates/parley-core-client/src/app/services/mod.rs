// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_service::{ChatService, SendMessageError};
pub use connection_service::ConnectionService;
pub use unread_service::UnreadService;

mod chat_service;
mod connection_service;
mod unread_service;
