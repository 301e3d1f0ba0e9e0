// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use secrecy::Secret;
use tracing::{debug, info, warn};

use parley_socket::ConnectionError;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynAuthProvider, DynClientEventDispatcher,
    DynConnectionService, DynMessageStoreService, DynMessagesRepository, DynTimeProvider,
    DynTypingStateRepository, DynUnreadCountsRepository,
};
use crate::domain::connection::models::ConnectionProperties;
use crate::domain::shared::models::{ConnectionState, UserId};
use crate::{ClientEvent, ConnectionEvent, ConversationEventType};

/// Drives the session lifecycle. Owns the connect and disconnect flows,
/// the post-connect synchronization with the server and the reconnect
/// loop that follows an unexpected transport drop.
pub struct ConnectionService {
    ctx: DynAppContext,
    auth_provider: DynAuthProvider,
    connection_service: DynConnectionService,
    client_event_dispatcher: DynClientEventDispatcher,
    message_store_service: DynMessageStoreService,
    messages_repo: DynMessagesRepository,
    time_provider: DynTimeProvider,
    typing_state_repo: DynTypingStateRepository,
    unread_counts_repo: DynUnreadCountsRepository,
}

impl From<&AppDependencies> for ConnectionService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            auth_provider: deps.auth_provider.clone(),
            connection_service: deps.connection_service.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            message_store_service: deps.message_store_service.clone(),
            messages_repo: deps.messages_repo.clone(),
            time_provider: deps.time_provider.clone(),
            typing_state_repo: deps.typing_state_repo.clone(),
            unread_counts_repo: deps.unread_counts_repo.clone(),
        }
    }
}

impl ConnectionService {
    pub async fn connect(&self) -> Result<(), ConnectionError> {
        if self.ctx.connection_state() != ConnectionState::Idle {
            self.disconnect().await;
        }

        let (user_id, token) = self.credentials()?;

        let epoch = self.ctx.bump_connection_epoch();
        self.ctx.set_connection_state(ConnectionState::Connecting);
        self.ctx.set_connection_properties(ConnectionProperties {
            connected_user_id: user_id.clone(),
            connection_timestamp: self.time_provider.now(),
        });

        if let Err(error) = self.connection_service.connect(&user_id, token).await {
            if self.ctx.connection_epoch() == epoch {
                self.ctx.set_connection_state(ConnectionState::Idle);
                self.ctx.reset_connection_properties();
            }
            return Err(error);
        }

        if self.ctx.connection_epoch() != epoch {
            return Err(ConnectionError::Cancelled);
        }

        self.ctx.set_connection_state(ConnectionState::Connected);
        self.finish_connect(&user_id).await;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged {
                event: ConnectionEvent::Connect,
            });
        Ok(())
    }

    pub async fn disconnect(&self) {
        self.ctx.bump_connection_epoch();
        self.connection_service.disconnect().await;

        self.ctx.set_connection_state(ConnectionState::Idle);
        self.ctx.reset_connection_properties();
        self.ctx.deselect_conversation();

        self.messages_repo.reset();
        self.typing_state_repo.reset();
        self.unread_counts_repo.reset();
    }

    /// Spawns the reconnect loop for the current epoch. Called after an
    /// unexpected transport drop.
    pub fn spawn_reconnect(self: &Arc<Self>) {
        let this = self.clone();
        tokio::spawn(async move { this.run_reconnect_loop().await });
    }

    pub async fn run_reconnect_loop(&self) {
        let epoch = self.ctx.connection_epoch();
        let policy = self.ctx.config.reconnect.clone();

        for attempt in 1..=policy.max_attempts {
            tokio::time::sleep(policy.delay_for_attempt(attempt)).await;

            // A manual connect or disconnect supersedes the loop.
            if self.ctx.connection_epoch() != epoch {
                debug!("Abandoning reconnect loop for a newer session.");
                return;
            }

            self.ctx
                .set_connection_state(ConnectionState::Reconnecting { attempt });
            info!(
                "Reconnecting ({attempt} of {max_attempts})…",
                max_attempts = policy.max_attempts
            );

            let Ok((user_id, token)) = self.credentials() else {
                warn!("Cannot reconnect without credentials.");
                break;
            };

            match self.connection_service.connect(&user_id, token).await {
                Ok(()) => {
                    if self.ctx.connection_epoch() != epoch {
                        return;
                    }

                    self.ctx.set_connection_properties(ConnectionProperties {
                        connected_user_id: user_id.clone(),
                        connection_timestamp: self.time_provider.now(),
                    });
                    self.ctx.set_connection_state(ConnectionState::Connected);
                    self.finish_connect(&user_id).await;

                    self.client_event_dispatcher
                        .dispatch_event(ClientEvent::ConnectionStatusChanged {
                            event: ConnectionEvent::Connect,
                        });
                    return;
                }
                Err(error) => {
                    warn!("Reconnect attempt {attempt} failed: {error}");
                }
            }
        }

        if self.ctx.connection_epoch() != epoch {
            return;
        }

        self.ctx.set_connection_state(ConnectionState::Disconnected);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged {
                event: ConnectionEvent::ConnectionLost,
            });
    }

    fn credentials(&self) -> Result<(UserId, Secret<String>), ConnectionError> {
        let Some(user_id) = self.auth_provider.current_user_id() else {
            return Err(ConnectionError::InvalidCredentials);
        };
        let Some(token) = self.auth_provider.auth_token() else {
            return Err(ConnectionError::InvalidCredentials);
        };
        Ok((user_id, token))
    }

    /// Server state that needs to be (re-)established on every successful
    /// connect. The server's presence table is volatile and our local
    /// caches may have missed events while we were offline.
    async fn finish_connect(&self, user_id: &UserId) {
        if let Err(err) = self.connection_service.announce_presence(user_id).await {
            warn!("Failed to announce presence: {err}");
        }

        match self.message_store_service.load_unread_counts().await {
            Ok(counts) => {
                self.unread_counts_repo.replace_all(counts);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::UnreadCountsChanged);
            }
            Err(err) => warn!("Failed to load unread counts: {err}"),
        }

        self.catch_up_selected_conversation().await;
    }

    /// Re-fetches the history of the selected conversation to fill the gap
    /// between the messages we saw live and the ones that arrived while
    /// the connection was down.
    async fn catch_up_selected_conversation(&self) {
        let (peer, generation) = {
            let selected = self.ctx.selected_conversation.read();
            let Some(selected) = selected.as_ref() else {
                return;
            };
            (selected.peer.clone(), selected.generation)
        };

        let messages = match self.message_store_service.load_history(&peer).await {
            Ok(messages) => messages,
            Err(err) => {
                warn!("Failed to catch up conversation with {peer}: {err}");
                return;
            }
        };

        if !self.ctx.selection_is_current(&peer, generation) {
            debug!("Dropping stale history for {peer}.");
            return;
        }

        for message in messages {
            self.messages_repo.ingest(message);
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                peer,
                r#type: ConversationEventType::MessagesNeedReload,
            });
    }
}
