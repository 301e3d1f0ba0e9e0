// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use client_event_dispatcher::ClientEventDispatcher;
#[cfg(feature = "test")]
pub use client_event_dispatcher::MockClientEventDispatcher;
pub use connection_event_handler::ConnectionEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use server_event::*;
pub use user_status_event_handler::UserStatusEventHandler;

mod client_event_dispatcher;
mod connection_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod server_event;
mod user_status_event_handler;

/// `ServerEventHandler` is a trait representing a handler for transport events.
///
/// Implementors of this trait should provide a `handle_event` method, which takes a `ServerEvent`
/// and returns an `Option<ServerEvent>`. If the handler returns `None`, it means the event has been
/// consumed and no further processing should be done. If it returns `Some(event)`, the event is
/// not consumed and should be passed to the next handler.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}
