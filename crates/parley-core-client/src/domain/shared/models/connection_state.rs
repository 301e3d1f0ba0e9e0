// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Lifecycle of the session's transport connection.
///
/// `Disconnected` is entered when the transport drops. Automatic reconnect
/// attempts move through `Reconnecting`; once their budget is exhausted the
/// state falls back to `Disconnected` and stays there until the next
/// explicit `connect`. A user-initiated disconnect returns to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Idle,
    Connecting,
    Connected,
    Reconnecting {
        attempt: u32,
    },
    Disconnected,
}
