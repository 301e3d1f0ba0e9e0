// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// Ephemeral per-peer typing flags. Implementations auto-expire an entry
/// after a quiet window; a repeated `set_typing` restarts that window
/// instead of stacking timers.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TypingStateRepository: Send + Sync {
    fn set_typing(&self, peer: &UserId);
    fn clear_typing(&self, peer: &UserId);
    fn is_typing(&self, peer: &UserId) -> bool;
    fn typing_peers(&self) -> Vec<UserId>;

    /// Drops all flags and cancels pending expiries. Called on session
    /// teardown.
    fn reset(&self);
}
