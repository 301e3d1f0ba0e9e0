// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use parley_socket::ConnectionError;

use crate::domain::shared::models::UserId;

/// Lifecycle operations on the realtime transport. Only the engine's
/// connection management talks to this; everything else goes through
/// `MessagingService` for outbound packets.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionService: Send + Sync {
    async fn connect(&self, user_id: &UserId, token: Secret<String>)
        -> Result<(), ConnectionError>;
    async fn disconnect(&self);

    /// Registers our user id in the server's volatile presence table. Must
    /// be repeated after every reconnect.
    async fn announce_presence(&self, user_id: &UserId) -> Result<()>;
}
