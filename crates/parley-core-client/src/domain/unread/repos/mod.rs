// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use unread_counts_repository::UnreadCountsRepository;
#[cfg(feature = "test")]
pub use unread_counts_repository::MockUnreadCountsRepository;

mod unread_counts_repository;
