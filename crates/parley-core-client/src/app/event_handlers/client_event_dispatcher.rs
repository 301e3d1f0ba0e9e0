// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::ClientEvent;

/// Fans client events out to whoever is observing the engine, typically
/// the embedding UI.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcher: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
