// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::domain::messaging::models::{
    ConversationId, DeliveryState, Message, MessageId, MessageKey,
};
use crate::domain::messaging::repos::MessagesRepository;

/// Session-scoped message ledger. Messages are kept in arrival order and
/// sorted by timestamp on read; the stable sort keeps arrival order for
/// equal timestamps.
#[derive(Default)]
pub struct InMemoryMessagesRepository {
    conversations: RwLock<HashMap<ConversationId, ConversationState>>,
}

#[derive(Default)]
struct ConversationState {
    messages: Vec<Message>,
    seen_keys: HashSet<MessageKey>,
}

impl MessagesRepository for InMemoryMessagesRepository {
    fn ingest(&self, message: Message) -> bool {
        let mut conversations = self.conversations.write();
        let state = conversations.entry(message.conversation_id()).or_default();

        if !state.seen_keys.insert(message.dedup_key()) {
            return false;
        }
        state.messages.push(message);
        true
    }

    fn get(&self, conversation: &ConversationId) -> Vec<Message> {
        let conversations = self.conversations.read();
        let Some(state) = conversations.get(conversation) else {
            return vec![];
        };

        let mut messages = state.messages.clone();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    fn get_message(&self, conversation: &ConversationId, id: &MessageId) -> Option<Message> {
        let conversations = self.conversations.read();
        conversations
            .get(conversation)?
            .messages
            .iter()
            .find(|m| &m.id == id)
            .cloned()
    }

    fn replace_provisional(
        &self,
        conversation: &ConversationId,
        temp_id: &MessageId,
        confirmed: Message,
    ) -> bool {
        let mut conversations = self.conversations.write();
        let Some(state) = conversations.get_mut(conversation) else {
            return false;
        };
        let Some(idx) = state.messages.iter().position(|m| &m.id == temp_id) else {
            return false;
        };

        let old_key = state.messages[idx].dedup_key();
        state.seen_keys.remove(&old_key);

        // The confirmed copy may already have arrived through the live
        // channel. In that case the provisional entry is simply dropped.
        if state.seen_keys.insert(confirmed.dedup_key()) {
            state.messages[idx] = confirmed;
        } else {
            state.messages.remove(idx);
        }
        true
    }

    fn set_delivery_state(
        &self,
        conversation: &ConversationId,
        id: &MessageId,
        delivery_state: DeliveryState,
    ) -> bool {
        let mut conversations = self.conversations.write();
        let Some(state) = conversations.get_mut(conversation) else {
            return false;
        };
        let Some(idx) = state.messages.iter().position(|m| &m.id == id) else {
            return false;
        };

        // The dedup key depends on the delivery state, so it has to be
        // re-derived along with the change.
        let old_key = state.messages[idx].dedup_key();
        state.seen_keys.remove(&old_key);
        state.messages[idx].state = delivery_state;
        let new_key = state.messages[idx].dedup_key();
        state.seen_keys.insert(new_key);
        true
    }

    fn reset(&self) {
        self.conversations.write().clear()
    }
}
