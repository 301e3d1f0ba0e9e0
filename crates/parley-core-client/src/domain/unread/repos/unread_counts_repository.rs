// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;
use crate::domain::unread::models::UnreadCounts;

/// Tracks how many messages from each peer have not been read yet. The
/// server snapshot is authoritative; increments and clears happen locally
/// between refreshes.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UnreadCountsRepository: Send + Sync {
    /// Replaces all local counts with the given server snapshot.
    fn replace_all(&self, counts: UnreadCounts);

    /// Bumps the count for `peer` by one. Returns the new count.
    fn increment(&self, peer: &UserId) -> u32;

    /// Zeroes the count for `peer`. Returns the count that was cleared.
    fn clear(&self, peer: &UserId) -> u32;

    fn get(&self, peer: &UserId) -> u32;

    fn total(&self) -> u32;

    fn counts(&self) -> UnreadCounts;

    fn reset(&self);
}
