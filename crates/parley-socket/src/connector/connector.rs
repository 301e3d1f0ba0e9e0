// parley-core-client/parley-socket
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;

use crate::packet::Packet;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Connection attempt was cancelled")]
    Cancelled,
    #[error("{msg:?}")]
    Generic { msg: String },
}

pub type ConnectionEventHandler =
    Box<dyn Fn(Box<dyn Connection>, ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

/// A single live session with the realtime server. Produces at most one
/// `Disconnected` event over its lifetime; packets stop after that.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        user_id: &str,
        token: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

#[derive(Debug)]
pub enum ConnectionEvent {
    Disconnected { error: Option<ConnectionError> },
    Packet(Packet),
}

pub trait Connection: Send + Sync {
    fn send_packet(&self, packet: Packet) -> Result<()>;
    fn disconnect(&self);
}
