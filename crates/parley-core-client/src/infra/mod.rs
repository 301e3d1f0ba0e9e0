// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod events;
pub mod http;
pub mod messaging;
pub mod presence;
pub mod socket;
pub mod unread;
