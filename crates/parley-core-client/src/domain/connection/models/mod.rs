// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_properties::ConnectionProperties;
pub use reconnect_policy::ReconnectPolicy;

mod connection_properties;
mod reconnect_policy;
