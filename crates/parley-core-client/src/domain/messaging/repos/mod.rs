// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messages_repository::MessagesRepository;
#[cfg(feature = "test")]
pub use messages_repository::MockMessagesRepository;

mod messages_repository;
