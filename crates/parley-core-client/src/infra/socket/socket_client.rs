// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::Secret;
use tracing::{debug, warn};

use parley_socket::{events, Connection, ConnectionError, ConnectionEvent, Connector, Packet};

use crate::app::event_handlers::{
    ConnectionEvent as ServerConnectionEvent, MessageEvent, ServerEvent, ServerEventHandlerQueue,
    UserStatusEvent,
};
use crate::domain::connection::services::ConnectionService;
use crate::domain::messaging::models::{Message, MessagePayload};
use crate::domain::messaging::services::MessagingService;
use crate::domain::presence::models::{ChatState, ChatStatePayload};
use crate::domain::shared::models::UserId;

/// Owns the live socket connection and translates its packets into
/// `ServerEvent`s for the handler queue. Each successful `connect` starts
/// a new connection generation; events from older generations are
/// discarded so a torn-down connection cannot poison a newer session.
#[derive(Clone)]
pub struct SocketClient {
    inner: Arc<SocketClientInner>,
}

struct SocketClientInner {
    connector: Box<dyn Connector>,
    event_queue: OnceLock<Arc<ServerEventHandlerQueue>>,
    current: Mutex<Option<Box<dyn Connection>>>,
    generation: AtomicU64,
}

impl SocketClient {
    pub fn new(connector: Box<dyn Connector>) -> Self {
        SocketClient {
            inner: Arc::new(SocketClientInner {
                connector,
                event_queue: OnceLock::new(),
                current: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Must be called exactly once before `connect`.
    pub fn set_event_queue(&self, queue: Arc<ServerEventHandlerQueue>) {
        if self.inner.event_queue.set(queue).is_err() {
            panic!("Tried to set the event queue of SocketClient twice.");
        }
    }

    fn send_packet(&self, packet: Packet) -> Result<()> {
        let current = self.inner.current.lock();
        let Some(connection) = current.as_ref() else {
            anyhow::bail!("Cannot send a packet without an active connection.");
        };
        connection.send_packet(packet)
    }
}

#[async_trait]
impl ConnectionService for SocketClient {
    async fn connect(
        &self,
        user_id: &UserId,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(old_connection) = self.inner.current.lock().take() {
            old_connection.disconnect();
        }

        let inner = self.inner.clone();
        let connection = self
            .inner
            .connector
            .connect(
                user_id.as_ref(),
                token,
                Box::new(move |_, event| {
                    let inner = inner.clone();
                    Box::pin(async move { inner.handle_connection_event(generation, event).await })
                }),
            )
            .await?;

        let mut current = self.inner.current.lock();
        // A disconnect or newer connect attempt won while we were waiting.
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            connection.disconnect();
            return Err(ConnectionError::Cancelled);
        }
        current.replace(connection);
        Ok(())
    }

    async fn disconnect(&self) {
        // Invalidate the generation first so events of the dying
        // connection are already stale when they race us.
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(connection) = self.inner.current.lock().take() {
            connection.disconnect();
        }
    }

    async fn announce_presence(&self, user_id: &UserId) -> Result<()> {
        self.send_packet(Packet::new(events::USER_CONNECTED, user_id)?)
    }
}

#[async_trait]
impl MessagingService for SocketClient {
    async fn broadcast_message(&self, message: &Message) -> Result<()> {
        self.send_packet(Packet::new(
            events::PRIVATE_MESSAGE,
            MessagePayload::from(message),
        )?)
    }

    async fn send_chat_state(
        &self,
        sender: &UserId,
        receiver: &UserId,
        state: ChatState,
    ) -> Result<()> {
        let event = match state {
            ChatState::Composing => events::TYPING,
            ChatState::Paused => events::STOPPED_TYPING,
        };
        self.send_packet(Packet::new(
            event,
            ChatStatePayload {
                user_id: sender.clone(),
                receiver_id: Some(receiver.clone()),
            },
        )?)
    }
}

impl SocketClientInner {
    async fn handle_connection_event(&self, generation: u64, event: ConnectionEvent) {
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Ignoring event of stale connection: {event:?}");
            return;
        }

        let queue = self
            .event_queue
            .get()
            .expect("Event queue was not set in SocketClient");

        match event {
            ConnectionEvent::Disconnected { error } => {
                self.current.lock().take();
                queue
                    .handle_event(ServerEvent::Connection(ServerConnectionEvent::Disconnected {
                        error,
                    }))
                    .await;
            }
            ConnectionEvent::Packet(packet) => {
                if let Some(event) = server_event_from_packet(packet) {
                    queue.handle_event(event).await;
                }
            }
        }
    }
}

fn server_event_from_packet(packet: Packet) -> Option<ServerEvent> {
    match packet.event.as_str() {
        events::PRIVATE_MESSAGE => match packet.payload_as::<MessagePayload>() {
            Ok(payload) => Some(ServerEvent::Message(MessageEvent { payload })),
            Err(err) => {
                warn!("Failed to parse 'private-message' payload: {err}");
                None
            }
        },
        events::USER_TYPING | events::USER_STOPPED_TYPING => {
            let state = if packet.event == events::USER_TYPING {
                ChatState::Composing
            } else {
                ChatState::Paused
            };
            match packet.payload_as::<ChatStatePayload>() {
                Ok(payload) => Some(ServerEvent::UserStatus(UserStatusEvent {
                    user_id: payload.user_id,
                    state,
                })),
                Err(err) => {
                    warn!("Failed to parse '{}' payload: {err}", packet.event);
                    None
                }
            }
        }
        _ => {
            debug!("Ignoring unknown packet '{}'.", packet.event);
            None
        }
    }
}
