// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::connection::models::ReconnectPolicy;
pub use crate::domain::messaging::models::{
    ConversationId, DeliveryState, Message, MessageId, MessagePayload,
};
pub use crate::domain::presence::models::ChatState;
pub use crate::domain::shared::models::{ConnectionState, UserId};
pub use crate::domain::unread::models::UnreadCounts;
