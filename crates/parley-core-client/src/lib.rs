// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate, ClientInner};
pub use client_builder::{ClientBuilder, UndefinedAuthProvider, UndefinedConnector};
pub use client_event::{ClientEvent, ConnectionEvent, ConversationEventType};

pub use app::dtos;

pub mod app;
pub mod domain;
pub mod infra;

mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod test;
