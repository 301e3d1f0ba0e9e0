// parley-core-client/parley-socket
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Event names used on the wire. Inbound and outbound names differ for
//! typing notifications; the server rewrites one into the other.

pub const USER_CONNECTED: &str = "user-connected";
pub const PRIVATE_MESSAGE: &str = "private-message";

/// Inbound typing notifications.
pub const USER_TYPING: &str = "user-typing";
pub const USER_STOPPED_TYPING: &str = "user-stopped-typing";

/// Outbound typing notifications.
pub const TYPING: &str = "typing";
pub const STOPPED_TYPING: &str = "stopped-typing";
