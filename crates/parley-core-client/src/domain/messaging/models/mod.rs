// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_id::ConversationId;
pub use message::{DeliveryState, Message, MessageId, MessageKey};
pub use message_payload::{MessagePayload, MessagePayloadError};

mod conversation_id;
mod message;
mod message_payload;
