// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{
    AppDependencies, DynAppContext, DynClientEventDispatcher, DynTypingStateRepository,
};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler, UserStatusEvent};
use crate::domain::presence::models::ChatState;
use crate::ClientEvent;

pub struct UserStatusEventHandler {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    typing_state_repo: DynTypingStateRepository,
}

impl From<&AppDependencies> for UserStatusEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            client_event_dispatcher: deps.client_event_dispatcher.clone(),
            typing_state_repo: deps.typing_state_repo.clone(),
        }
    }
}

#[async_trait]
impl ServerEventHandler for UserStatusEventHandler {
    fn name(&self) -> &'static str {
        "user_status"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::UserStatus(event) => self.handle_user_status_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl UserStatusEventHandler {
    fn handle_user_status_event(&self, event: UserStatusEvent) -> Result<()> {
        // The server should not reflect our own status back at us, but a
        // stray echo must not flag us as a typing peer.
        if self
            .ctx
            .current_user_id()
            .map(|id| id == event.user_id)
            .unwrap_or(false)
        {
            return Ok(());
        }

        let was_typing = self.typing_state_repo.is_typing(&event.user_id);
        let is_typing = match event.state {
            ChatState::Composing => {
                self.typing_state_repo.set_typing(&event.user_id);
                true
            }
            ChatState::Paused => {
                self.typing_state_repo.clear_typing(&event.user_id);
                false
            }
        };

        // A repeated `composing` only restarts the expiry window.
        if was_typing != is_typing {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::TypingStateChanged {
                    peer: event.user_id,
                    is_typing,
                });
        }
        Ok(())
    }
}
