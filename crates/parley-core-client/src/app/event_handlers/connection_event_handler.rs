// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynAppContext, DynClientEventDispatcher};
use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::app::services::ConnectionService;
use crate::domain::shared::models::ConnectionState;
use crate::{ClientEvent, ConnectionEvent as ClientConnectionEvent};

pub struct ConnectionEventHandler {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    connection_service: Arc<ConnectionService>,
}

impl ConnectionEventHandler {
    pub fn new(deps: &AppDependencies, connection_service: Arc<ConnectionService>) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            connection_service,
        }
    }
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event).await?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    async fn handle_connection_event(&self, event: ConnectionEvent) -> Result<()> {
        match event {
            ConnectionEvent::Connected => {
                // We'll send an event from our `connect` method since we
                // announce our presence and pull server state first. Once
                // we fire the event SDK consumers can be sure that we have
                // everything we need.
            }
            ConnectionEvent::Disconnected { error } => {
                // Deliberate disconnects tear the connection down after
                // bumping the epoch, so by the time their event arrives
                // the state is no longer `Connected` and they end here.
                if self.ctx.connection_state() != ConnectionState::Connected {
                    return Ok(());
                }

                self.ctx.set_connection_state(ConnectionState::Disconnected);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ClientConnectionEvent::Disconnect { error },
                    });
                self.connection_service.spawn_reconnect();
            }
        }
        Ok(())
    }
}
