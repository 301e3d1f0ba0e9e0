// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_unread_counts_repository::InMemoryUnreadCountsRepository;

mod in_memory_unread_counts_repository;
