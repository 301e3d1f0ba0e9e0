// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::{AppDependencies, DynAppContext};
use crate::app::services::{ChatService, ConnectionService, UnreadService};
use crate::client_builder::{ClientBuilder, UndefinedAuthProvider, UndefinedConnector};
use crate::domain::messaging::services::MessageStoreError;
use crate::domain::shared::models::{ConnectionState, UserId};
use crate::ClientEvent;

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, event: ClientEvent);
}

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedConnector, UndefinedAuthProvider> {
        ClientBuilder::new()
    }
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ClientInner {
    pub connection: Arc<ConnectionService>,
    pub chat: Arc<ChatService>,
    pub unread: Arc<UnreadService>,
    ctx: DynAppContext,
}

impl From<&AppDependencies> for ClientInner {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            connection: Arc::new(ConnectionService::from(deps)),
            chat: Arc::new(ChatService::from(deps)),
            unread: Arc::new(UnreadService::from(deps)),
            ctx: deps.ctx.clone(),
        }
    }
}

impl ClientInner {
    pub fn connection_state(&self) -> ConnectionState {
        self.ctx.connection_state()
    }

    /// Selects the conversation with `peer`: loads its history and marks
    /// everything the peer sent so far as read.
    pub async fn select_conversation(&self, peer: &UserId) -> Result<(), MessageStoreError> {
        self.chat.select_conversation(peer).await?;
        self.unread.clear(peer).await;
        Ok(())
    }
}
