// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{ConversationId, DeliveryState, Message, MessageId};

/// The canonical in-memory ledger of all messages seen during this session.
/// Messages arrive through two independent channels (history fetches and
/// live pushes); `ingest` is idempotent so overlap between the two is
/// absorbed here.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagesRepository: Send + Sync {
    /// Appends the message unless its dedup key is already known. Returns
    /// whether the message was accepted.
    fn ingest(&self, message: Message) -> bool;

    /// All messages of the conversation, sorted by timestamp ascending,
    /// ties broken by insertion order.
    fn get(&self, conversation: &ConversationId) -> Vec<Message>;

    fn get_message(&self, conversation: &ConversationId, id: &MessageId) -> Option<Message>;

    /// Atomically swaps the provisional entry `temp_id` for its confirmed
    /// counterpart. Returns false if no such provisional entry exists.
    fn replace_provisional(
        &self,
        conversation: &ConversationId,
        temp_id: &MessageId,
        confirmed: Message,
    ) -> bool;

    fn set_delivery_state(
        &self,
        conversation: &ConversationId,
        id: &MessageId,
        state: DeliveryState,
    ) -> bool;

    /// Drops all conversations. Called on session teardown.
    fn reset(&self);
}
