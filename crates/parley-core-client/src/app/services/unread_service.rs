// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;

use crate::app::deps::{
    AppDependencies, DynClientEventDispatcher, DynMessageStoreService, DynUnreadCountsRepository,
};
use crate::domain::shared::models::UserId;
use crate::domain::unread::models::UnreadCounts;
use crate::ClientEvent;

/// Read and unread bookkeeping. Counts increment as messages arrive and
/// clear when the user catches up on a conversation.
pub struct UnreadService {
    client_event_dispatcher: DynClientEventDispatcher,
    message_store_service: DynMessageStoreService,
    unread_counts_repo: DynUnreadCountsRepository,
}

impl From<&AppDependencies> for UnreadService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            message_store_service: deps.message_store_service.clone(),
            unread_counts_repo: deps.unread_counts_repo.clone(),
        }
    }
}

impl UnreadService {
    /// Replaces the local counts with the server's.
    pub async fn refresh_from_server(&self) {
        match self.message_store_service.load_unread_counts().await {
            Ok(counts) => {
                self.unread_counts_repo.replace_all(counts);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::UnreadCountsChanged);
            }
            Err(err) => warn!("Failed to load unread counts: {err}"),
        }
    }

    /// Marks the conversation with `peer` as read. The local count is
    /// cleared only after the acknowledgement settles, so messages that
    /// arrive in the meantime are cleared along with it.
    pub async fn clear(&self, peer: &UserId) {
        if let Err(err) = self.message_store_service.mark_read(peer).await {
            warn!("Failed to acknowledge messages from {peer} as read: {err}");
        }

        if self.unread_counts_repo.clear(peer) > 0 {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::UnreadCountsChanged);
        }
    }

    pub fn count(&self, peer: &UserId) -> u32 {
        self.unread_counts_repo.get(peer)
    }

    pub fn total(&self) -> u32 {
        self.unread_counts_repo.total()
    }

    pub fn counts(&self) -> UnreadCounts {
        self.unread_counts_repo.counts()
    }
}
