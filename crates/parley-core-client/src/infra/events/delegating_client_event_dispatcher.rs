// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use crate::app::event_handlers::ClientEventDispatcher;
use crate::{ClientDelegate, ClientEvent};

/// Forwards client events to the delegate the host registered, if any.
pub struct DelegatingClientEventDispatcher {
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl DelegatingClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        DelegatingClientEventDispatcher { delegate }
    }
}

impl ClientEventDispatcher for DelegatingClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            debug!("Dropping client event since no delegate is set: {event:?}");
            return;
        };
        delegate.handle_event(event)
    }
}
