// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parley_socket::{IDProvider, TimeProvider};

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcher;
use crate::domain::account::services::AuthProvider;
use crate::domain::connection::services::ConnectionService;
use crate::domain::messaging::repos::MessagesRepository;
use crate::domain::messaging::services::{MessageStoreService, MessagingService};
use crate::domain::presence::repos::TypingStateRepository;
use crate::domain::unread::repos::UnreadCountsRepository;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynAuthProvider = Arc<dyn AuthProvider>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcher>;
pub(crate) type DynConnectionService = Arc<dyn ConnectionService>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynMessageStoreService = Arc<dyn MessageStoreService>;
pub(crate) type DynMessagesRepository = Arc<dyn MessagesRepository>;
pub(crate) type DynMessagingService = Arc<dyn MessagingService>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;
pub(crate) type DynTypingStateRepository = Arc<dyn TypingStateRepository>;
pub(crate) type DynUnreadCountsRepository = Arc<dyn UnreadCountsRepository>;

#[derive(Clone)]
pub struct AppDependencies {
    pub auth_provider: DynAuthProvider,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connection_service: DynConnectionService,
    pub ctx: DynAppContext,
    pub id_provider: DynIDProvider,
    pub message_store_service: DynMessageStoreService,
    pub messages_repo: DynMessagesRepository,
    pub messaging_service: DynMessagingService,
    pub time_provider: DynTimeProvider,
    pub typing_state_repo: DynTypingStateRepository,
    pub unread_counts_repo: DynUnreadCountsRepository,
}
