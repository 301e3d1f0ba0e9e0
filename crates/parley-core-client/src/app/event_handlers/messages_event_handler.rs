// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynMessagesRepository,
    DynUnreadCountsRepository,
};
use crate::app::event_handlers::{MessageEvent, ServerEvent, ServerEventHandler};
use crate::{ClientEvent, ConversationEventType};

pub struct MessagesEventHandler {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    messages_repo: DynMessagesRepository,
    unread_counts_repo: DynUnreadCountsRepository,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            messages_repo: deps.messages_repo.clone(),
            unread_counts_repo: deps.unread_counts_repo.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(event) => self.handle_message_event(event).await?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    async fn handle_message_event(&self, event: MessageEvent) -> Result<()> {
        let Ok(current_user_id) = self.ctx.current_user_id() else {
            warn!("Received message while not connected. Dropping it.");
            return Ok(());
        };

        let message = match event.payload.into_message() {
            Ok(message) => message,
            Err(err) => {
                warn!("Dropping malformed message payload: {err}");
                return Ok(());
            }
        };

        if message.sender != current_user_id && message.receiver != current_user_id {
            warn!(
                "Dropping message that is not addressed to us (sender {}, receiver {}).",
                message.sender, message.receiver
            );
            return Ok(());
        }

        let conversation = message.conversation_id();
        let peer = conversation
            .peer_of(&current_user_id)
            .cloned()
            .unwrap_or_else(|| message.sender.clone());
        let is_inbound = message.sender != current_user_id;
        let message_id = message.id.clone();

        if !self.messages_repo.ingest(message) {
            debug!("Ignoring duplicate message {message_id}.");
            return Ok(());
        }

        if is_inbound {
            self.unread_counts_repo.increment(&peer);
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::UnreadCountsChanged);
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationChanged {
                peer,
                r#type: ConversationEventType::MessagesAppended {
                    message_ids: vec![message_id],
                },
            });
        Ok(())
    }
}
