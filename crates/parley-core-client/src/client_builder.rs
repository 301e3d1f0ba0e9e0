// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use url::Url;

use parley_socket::{Connector, IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynAuthProvider, DynIDProvider,
    DynMessageStoreService, DynTimeProvider,
};
use crate::app::event_handlers::{
    ClientEventDispatcher, ConnectionEventHandler, MessagesEventHandler, ServerEventHandlerQueue,
    UserStatusEventHandler,
};
use crate::client::ClientInner;
use crate::domain::account::services::AuthProvider;
use crate::infra::events::DelegatingClientEventDispatcher;
use crate::infra::http::HttpMessageStore;
use crate::infra::messaging::InMemoryMessagesRepository;
use crate::infra::presence::TypingStateRegistry;
use crate::infra::socket::SocketClient;
use crate::infra::unread::InMemoryUnreadCountsRepository;
use crate::{Client, ClientDelegate, ClientEvent};

pub struct UndefinedConnector;
pub struct UndefinedAuthProvider;

pub struct ClientBuilder<C, A> {
    app_config: AppConfig,
    auth_provider: A,
    connector: C,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    message_store: Option<DynMessageStoreService>,
    message_store_url: Option<Url>,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedConnector, UndefinedAuthProvider> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            auth_provider: UndefinedAuthProvider,
            connector: UndefinedConnector,
            delegate: None,
            id_provider: Arc::new(UUIDProvider::default()),
            message_store: None,
            message_store_url: None,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }
}

impl<A> ClientBuilder<UndefinedConnector, A> {
    pub fn set_connector(self, connector: Box<dyn Connector>) -> ClientBuilder<Box<dyn Connector>, A> {
        ClientBuilder {
            app_config: self.app_config,
            auth_provider: self.auth_provider,
            connector,
            delegate: self.delegate,
            id_provider: self.id_provider,
            message_store: self.message_store,
            message_store_url: self.message_store_url,
            time_provider: self.time_provider,
        }
    }
}

impl<C> ClientBuilder<C, UndefinedAuthProvider> {
    pub fn set_auth_provider<P: AuthProvider + 'static>(
        self,
        auth_provider: P,
    ) -> ClientBuilder<C, DynAuthProvider> {
        ClientBuilder {
            app_config: self.app_config,
            auth_provider: Arc::new(auth_provider),
            connector: self.connector,
            delegate: self.delegate,
            id_provider: self.id_provider,
            message_store: self.message_store,
            message_store_url: self.message_store_url,
            time_provider: self.time_provider,
        }
    }
}

impl<C, A> ClientBuilder<C, A> {
    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    /// Points the client at the Message Store's REST API.
    pub fn set_message_store_url(mut self, url: Url) -> Self {
        self.message_store_url = Some(url);
        self
    }

    /// Replaces the default HTTP-backed Message Store.
    pub fn set_message_store(mut self, message_store: DynMessageStoreService) -> Self {
        self.message_store = Some(message_store);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<Box<dyn Connector>, DynAuthProvider> {
    pub fn build(self) -> Client {
        let server_event_handler_queue = Arc::new(ServerEventHandlerQueue::new());

        let socket = SocketClient::new(self.connector);
        let event_dispatcher = Arc::new(DelegatingClientEventDispatcher::new(self.delegate));

        let message_store = self.message_store.unwrap_or_else(|| {
            let url = self
                .message_store_url
                .expect("Either a message store or a message store url must be set");
            Arc::new(HttpMessageStore::new(url, self.auth_provider.clone()))
        });

        let typing_state_registry = TypingStateRegistry::new(self.app_config.typing_timeout);
        {
            let event_dispatcher = event_dispatcher.clone();
            typing_state_registry.set_expiry_handler(move |peer| {
                event_dispatcher.dispatch_event(ClientEvent::TypingStateChanged {
                    peer,
                    is_typing: false,
                })
            });
        }

        let dependencies = AppDependencies {
            auth_provider: self.auth_provider,
            client_event_dispatcher: event_dispatcher,
            connection_service: Arc::new(socket.clone()),
            ctx: Arc::new(AppContext::new(self.app_config)),
            id_provider: self.id_provider,
            message_store_service: message_store,
            messages_repo: Arc::new(InMemoryMessagesRepository::default()),
            messaging_service: Arc::new(socket.clone()),
            time_provider: self.time_provider,
            typing_state_repo: Arc::new(typing_state_registry),
            unread_counts_repo: Arc::new(InMemoryUnreadCountsRepository::default()),
        };

        let client_inner = Arc::new(ClientInner::from(&dependencies));

        server_event_handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::new(
                &dependencies,
                client_inner.connection.clone(),
            )),
            Box::new(MessagesEventHandler::from(&dependencies)),
            Box::new(UserStatusEventHandler::from(&dependencies)),
        ]);
        socket.set_event_queue(server_event_handler_queue);

        Client::from(client_inner)
    }
}
