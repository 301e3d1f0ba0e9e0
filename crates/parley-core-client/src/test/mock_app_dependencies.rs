// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;

use parley_socket::test::{ConstantTimeProvider, IncrementingIDProvider};

use crate::app::deps::{AppContext, AppDependencies, DynIDProvider, DynTimeProvider};
use crate::app::event_handlers::MockClientEventDispatcher;
use crate::domain::account::services::MockAuthProvider;
use crate::domain::connection::models::ConnectionProperties;
use crate::domain::connection::services::MockConnectionService;
use crate::domain::messaging::repos::MockMessagesRepository;
use crate::domain::messaging::services::{MockMessageStoreService, MockMessagingService};
use crate::domain::presence::repos::MockTypingStateRepository;
use crate::domain::shared::models::{ConnectionState, UserId};
use crate::domain::unread::repos::MockUnreadCountsRepository;

pub fn mock_reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap()
}

pub fn mock_account_id() -> UserId {
    UserId::from("jane")
}

pub fn mock_peer_id() -> UserId {
    UserId::from("bob")
}

pub fn mock_second_peer_id() -> UserId {
    UserId::from("carol")
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext {
            connection_state: RwLock::new(ConnectionState::Connected),
            connection_properties: RwLock::new(Some(ConnectionProperties {
                connected_user_id: mock_account_id(),
                connection_timestamp: mock_reference_date(),
            })),
            connection_epoch: Default::default(),
            selected_conversation: Default::default(),
            selection_counter: Default::default(),
            config: Default::default(),
        }
    }
}

pub struct MockAppDependencies {
    pub auth_provider: MockAuthProvider,
    pub client_event_dispatcher: MockClientEventDispatcher,
    pub connection_service: MockConnectionService,
    pub ctx: AppContext,
    pub id_provider: DynIDProvider,
    pub message_store_service: MockMessageStoreService,
    pub messages_repo: MockMessagesRepository,
    pub messaging_service: MockMessagingService,
    pub time_provider: DynTimeProvider,
    pub typing_state_repo: MockTypingStateRepository,
    pub unread_counts_repo: MockUnreadCountsRepository,
}

impl Default for MockAppDependencies {
    fn default() -> Self {
        MockAppDependencies {
            auth_provider: Default::default(),
            client_event_dispatcher: Default::default(),
            connection_service: Default::default(),
            ctx: Default::default(),
            id_provider: Arc::new(IncrementingIDProvider::new("id")),
            message_store_service: Default::default(),
            messages_repo: Default::default(),
            messaging_service: Default::default(),
            time_provider: Arc::new(ConstantTimeProvider::new(mock_reference_date())),
            typing_state_repo: Default::default(),
            unread_counts_repo: Default::default(),
        }
    }
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            auth_provider: Arc::new(mock.auth_provider),
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            connection_service: Arc::new(mock.connection_service),
            ctx: Arc::new(mock.ctx),
            id_provider: mock.id_provider,
            message_store_service: Arc::new(mock.message_store_service),
            messages_repo: Arc::new(mock.messages_repo),
            messaging_service: Arc::new(mock.messaging_service),
            time_provider: mock.time_provider,
            typing_state_repo: Arc::new(mock.typing_state_repo),
            unread_counts_repo: Arc::new(mock.unread_counts_repo),
        }
    }
}
