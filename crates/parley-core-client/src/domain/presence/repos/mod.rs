// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use typing_state_repository::TypingStateRepository;
#[cfg(feature = "test")]
pub use typing_state_repository::MockTypingStateRepository;

mod typing_state_repository;
