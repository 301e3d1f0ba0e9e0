// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;
#[cfg(feature = "test")]
pub use connection_service::MockConnectionService;

mod connection_service;
