// parley-core-client/parley-socket
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connector::{
    Connection, ConnectionError, ConnectionEvent, ConnectionEventHandler, Connector, PinnedFuture,
};
pub use deps::{IDProvider, SystemTimeProvider, TimeProvider, UUIDProvider};
pub use packet::Packet;

mod connector;
mod deps;
mod packet;

pub mod events;

#[cfg(feature = "test")]
pub mod test;
