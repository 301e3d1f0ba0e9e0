// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;

use crate::domain::shared::models::UserId;

/// Bridge to the embedding app's session storage. The engine never stores
/// credentials itself.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthProvider: Send + Sync {
    fn current_user_id(&self) -> Option<UserId>;
    fn auth_token(&self) -> Option<Secret<String>>;

    /// Called when the Message Store API rejects our credentials. The host
    /// is expected to tear the session down via `disconnect`.
    fn handle_unauthorized(&self);
}
