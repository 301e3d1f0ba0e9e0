// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_store_service::{MessageStoreError, MessageStoreService};
pub use messaging_service::MessagingService;

#[cfg(feature = "test")]
pub use message_store_service::MockMessageStoreService;
#[cfg(feature = "test")]
pub use messaging_service::MockMessagingService;

mod message_store_service;
mod messaging_service;
