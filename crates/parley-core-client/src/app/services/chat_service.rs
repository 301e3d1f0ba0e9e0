// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynIDProvider,
    DynMessageStoreService, DynMessagesRepository, DynMessagingService, DynTimeProvider,
    DynTypingStateRepository,
};
use crate::domain::messaging::models::{ConversationId, DeliveryState, Message, MessageId};
use crate::domain::messaging::services::MessageStoreError;
use crate::domain::presence::models::ChatState;
use crate::domain::shared::models::UserId;
use crate::{ClientEvent, ConversationEventType};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SendMessageError {
    #[error("Message body must not be empty")]
    EmptyBody,
    #[error("Cannot send a message to yourself")]
    InvalidRecipient,
    #[error("Not connected")]
    NotConnected,
    #[error("No message with the given id")]
    UnknownMessage,
    #[error("Only failed messages can be retried")]
    NotRetryable,
    #[error(transparent)]
    Persistence(#[from] MessageStoreError),
}

/// Everything that happens inside a conversation: sending and retrying
/// messages, loading history when a conversation is selected, and our own
/// typing notifications.
pub struct ChatService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    id_provider: DynIDProvider,
    message_store_service: DynMessageStoreService,
    messages_repo: DynMessagesRepository,
    messaging_service: DynMessagingService,
    time_provider: DynTimeProvider,
    typing_state_repo: DynTypingStateRepository,
    compose_bursts: Arc<Mutex<HashMap<UserId, ComposeBurst>>>,
    burst_counter: AtomicU64,
}

struct ComposeBurst {
    generation: u64,
    timer: JoinHandle<()>,
}

impl From<&AppDependencies> for ChatService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            id_provider: deps.id_provider.clone(),
            message_store_service: deps.message_store_service.clone(),
            messages_repo: deps.messages_repo.clone(),
            messaging_service: deps.messaging_service.clone(),
            time_provider: deps.time_provider.clone(),
            typing_state_repo: deps.typing_state_repo.clone(),
            compose_bursts: Default::default(),
            burst_counter: Default::default(),
        }
    }
}

impl ChatService {
    /// Stages a message for `receiver` and pushes it through persistence
    /// and broadcast. The message becomes visible locally right away with
    /// a provisional id; the returned id is the server-assigned one.
    pub async fn send_message(
        &self,
        receiver: &UserId,
        body: impl AsRef<str>,
    ) -> Result<MessageId, SendMessageError> {
        let body = body.as_ref().trim();
        if body.is_empty() {
            return Err(SendMessageError::EmptyBody);
        }

        let sender = self
            .ctx
            .current_user_id()
            .map_err(|_| SendMessageError::NotConnected)?;
        if &sender == receiver {
            return Err(SendMessageError::InvalidRecipient);
        }

        // Sending ends the compose burst. The peer sees our typing
        // indicator disappear right before the message comes in.
        if self.end_compose_burst(receiver) {
            self.send_chat_state(&sender, receiver, ChatState::Paused)
                .await;
        }

        let temp_id = MessageId::from(format!("temp-{}", self.id_provider.new_id()));
        let message = Message {
            id: temp_id.clone(),
            sender,
            receiver: receiver.clone(),
            body: body.to_string(),
            timestamp: self.time_provider.now(),
            state: DeliveryState::Pending,
        };
        let conversation = message.conversation_id();

        self.messages_repo.ingest(message.clone());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                peer: receiver.clone(),
                r#type: ConversationEventType::MessagesAppended {
                    message_ids: vec![temp_id.clone()],
                },
            });

        self.persist_and_broadcast(&conversation, receiver, &temp_id, message)
            .await
    }

    /// Retries a message whose persistence failed.
    pub async fn retry_send(
        &self,
        peer: &UserId,
        message_id: &MessageId,
    ) -> Result<MessageId, SendMessageError> {
        let me = self
            .ctx
            .current_user_id()
            .map_err(|_| SendMessageError::NotConnected)?;
        let conversation = ConversationId::new(me, peer.clone());

        let message = self
            .messages_repo
            .get_message(&conversation, message_id)
            .ok_or(SendMessageError::UnknownMessage)?;
        if message.state != DeliveryState::Failed {
            return Err(SendMessageError::NotRetryable);
        }

        self.messages_repo
            .set_delivery_state(&conversation, message_id, DeliveryState::Pending);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                peer: peer.clone(),
                r#type: ConversationEventType::MessagesUpdated {
                    message_ids: vec![message_id.clone()],
                },
            });

        let message = Message {
            state: DeliveryState::Pending,
            ..message
        };
        self.persist_and_broadcast(&conversation, peer, message_id, message)
            .await
    }

    async fn persist_and_broadcast(
        &self,
        conversation: &ConversationId,
        peer: &UserId,
        temp_id: &MessageId,
        message: Message,
    ) -> Result<MessageId, SendMessageError> {
        match self
            .message_store_service
            .save_message(peer, &message.body)
            .await
        {
            Ok(confirmed) => {
                let confirmed_id = confirmed.id.clone();
                self.messages_repo
                    .replace_provisional(conversation, temp_id, confirmed.clone());
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConversationChanged {
                        peer: peer.clone(),
                        r#type: ConversationEventType::MessagesUpdated {
                            message_ids: vec![confirmed_id.clone()],
                        },
                    });

                if let Err(err) = self.messaging_service.broadcast_message(&confirmed).await {
                    warn!("Failed to broadcast message {confirmed_id}: {err}");
                }
                Ok(confirmed_id)
            }
            Err(err) => {
                error!("Failed to persist message: {err}");
                self.messages_repo.set_delivery_state(
                    conversation,
                    temp_id,
                    DeliveryState::Failed,
                );
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConversationChanged {
                        peer: peer.clone(),
                        r#type: ConversationEventType::MessagesUpdated {
                            message_ids: vec![temp_id.clone()],
                        },
                    });

                // The peer still gets the message live even though it was
                // never durably stored. They would otherwise only ever see
                // it again if the retry here succeeds.
                if let Err(err) = self.messaging_service.broadcast_message(&message).await {
                    warn!("Failed to broadcast unpersisted message: {err}");
                }
                Err(err.into())
            }
        }
    }
}

impl ChatService {
    /// Selects the conversation with `peer` and loads its history from the
    /// server. A quick succession of selections may finish out of order;
    /// only the most recent selection gets to apply its result.
    pub async fn select_conversation(&self, peer: &UserId) -> Result<(), MessageStoreError> {
        let generation = self.ctx.select_conversation(peer);

        let messages = match self.message_store_service.load_history(peer).await {
            Ok(messages) => messages,
            Err(err) => {
                warn!("Failed to load history for {peer}: {err}");
                if self.ctx.selection_is_current(peer, generation) {
                    self.client_event_dispatcher
                        .dispatch_event(ClientEvent::ConversationChanged {
                            peer: peer.clone(),
                            r#type: ConversationEventType::LoadFailed,
                        });
                }
                return Err(err);
            }
        };

        if !self.ctx.selection_is_current(peer, generation) {
            debug!("Dropping stale history for {peer}.");
            return Ok(());
        }

        for message in messages {
            self.messages_repo.ingest(message);
        }
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                peer: peer.clone(),
                r#type: ConversationEventType::MessagesNeedReload,
            });
        Ok(())
    }

    pub fn deselect_conversation(&self) {
        self.ctx.deselect_conversation();
    }

    /// The locally known messages of our conversation with `peer`, in
    /// timestamp order.
    pub fn messages(&self, peer: &UserId) -> Result<Vec<Message>> {
        let me = self.ctx.current_user_id()?;
        Ok(self
            .messages_repo
            .get(&ConversationId::new(me, peer.clone())))
    }

    pub fn is_peer_typing(&self, peer: &UserId) -> bool {
        self.typing_state_repo.is_typing(peer)
    }

    pub fn typing_peers(&self) -> Vec<UserId> {
        self.typing_state_repo.typing_peers()
    }
}

impl ChatService {
    /// Reports whether our user is composing a message to `peer`. Meant to
    /// be called on every keystroke; a `composing` notification goes out
    /// once per burst and a `paused` one after the keystrokes stop.
    pub async fn set_user_is_composing(&self, peer: &UserId, is_composing: bool) -> Result<()> {
        let me = self.ctx.current_user_id()?;

        if !is_composing {
            if self.end_compose_burst(peer) {
                self.send_chat_state(&me, peer, ChatState::Paused).await;
            }
            return Ok(());
        }

        let generation = self.burst_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let timer = self.spawn_pause_timer(me.clone(), peer.clone(), generation);

        let burst_started = {
            let mut bursts = self.compose_bursts.lock();
            let old = bursts.insert(peer.clone(), ComposeBurst { generation, timer });
            if let Some(old) = old {
                old.timer.abort();
                false
            } else {
                true
            }
        };

        if burst_started {
            self.send_chat_state(&me, peer, ChatState::Composing).await;
        }
        Ok(())
    }

    fn end_compose_burst(&self, peer: &UserId) -> bool {
        let mut bursts = self.compose_bursts.lock();
        let Some(burst) = bursts.remove(peer) else {
            return false;
        };
        burst.timer.abort();
        true
    }

    fn spawn_pause_timer(&self, me: UserId, peer: UserId, generation: u64) -> JoinHandle<()> {
        let bursts = self.compose_bursts.clone();
        let messaging_service = self.messaging_service.clone();
        let pause_after = self.ctx.config.compose_pause_after;

        tokio::spawn(async move {
            tokio::time::sleep(pause_after).await;

            {
                let mut bursts = bursts.lock();
                // A later keystroke replaced our entry with a fresh timer.
                match bursts.get(&peer) {
                    Some(burst) if burst.generation == generation => (),
                    Some(_) | None => return,
                }
                bursts.remove(&peer);
            }

            if let Err(err) = messaging_service
                .send_chat_state(&me, &peer, ChatState::Paused)
                .await
            {
                warn!("Failed to send 'paused' chat state: {err}");
            }
        })
    }

    async fn send_chat_state(&self, me: &UserId, peer: &UserId, state: ChatState) {
        if let Err(err) = self.messaging_service.send_chat_state(me, peer, state).await {
            warn!("Failed to send chat state: {err}");
        }
    }
}
