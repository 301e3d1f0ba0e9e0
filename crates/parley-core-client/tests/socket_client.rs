// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use secrecy::Secret;
use serde_json::json;

use parley_socket::test::Connection;
use parley_socket::{ConnectionError, Packet};

use parley_core_client::domain::account::services::AuthProvider;
use parley_core_client::domain::messaging::services::MockMessageStoreService;
use parley_core_client::domain::unread::models::UnreadCounts;
use parley_core_client::dtos::{ConnectionState, MessageId, UserId};
use parley_core_client::test::mock_data;
use parley_core_client::{Client, ClientDelegate, ClientEvent, ConnectionEvent};

struct StaticAuthProvider;

impl AuthProvider for StaticAuthProvider {
    fn current_user_id(&self) -> Option<UserId> {
        Some(mock_data::account_id())
    }

    fn auth_token(&self) -> Option<Secret<String>> {
        Some(Secret::new("token".to_string()))
    }

    fn handle_unauthorized(&self) {}
}

#[derive(Clone, Default)]
struct RecordingDelegate {
    events: Arc<Mutex<Vec<ClientEvent>>>,
}

impl ClientDelegate for RecordingDelegate {
    fn handle_event(&self, event: ClientEvent) {
        self.events.lock().push(event)
    }
}

fn message_packet(id: &str, sender: &str, receiver: &str, body: &str) -> Packet {
    Packet {
        event: "private-message".to_string(),
        payload: json!({
            "id": id,
            "senderId": sender,
            "receiverId": receiver,
            "message": body,
            "timestamp": "2025-03-14T12:00:00Z",
        }),
    }
}

fn client_with(
    connection: &Arc<Connection>,
    store: MockMessageStoreService,
    delegate: &RecordingDelegate,
) -> Client {
    Client::builder()
        .set_connector(connection.connector())
        .set_auth_provider(StaticAuthProvider)
        .set_message_store(Arc::new(store))
        .set_delegate(Some(Box::new(delegate.clone())))
        .build()
}

fn store_with_empty_unread_counts() -> MockMessageStoreService {
    let mut store = MockMessageStoreService::default();
    store
        .expect_load_unread_counts()
        .returning(|| Box::pin(async { Ok(UnreadCounts::default()) }));
    store
}

#[tokio::test]
async fn test_connect_announces_presence() -> Result<()> {
    let connection = Arc::new(Connection::default());
    let delegate = RecordingDelegate::default();
    let client = client_with(&connection, store_with_empty_unread_counts(), &delegate);

    client.connection.connect().await?;

    assert_eq!(client.connection_state(), ConnectionState::Connected);
    assert_eq!(connection.sent_event_names(), vec!["user-connected"]);
    assert_eq!(
        delegate.events.lock().clone(),
        vec![
            ClientEvent::UnreadCountsChanged,
            ClientEvent::ConnectionStatusChanged {
                event: ConnectionEvent::Connect
            },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_inbound_message_reaches_ledger_and_delegate() -> Result<()> {
    let connection = Arc::new(Connection::default());
    let delegate = RecordingDelegate::default();
    let client = client_with(&connection, store_with_empty_unread_counts(), &delegate);

    client.connection.connect().await?;
    delegate.events.lock().clear();

    connection
        .receive_packet(message_packet("m1", "bob", "jane", "Hello"))
        .await;

    let messages = client.chat.messages(&mock_data::peer_id())?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, MessageId::from("m1"));
    assert_eq!(client.unread.count(&mock_data::peer_id()), 1);
    assert!(delegate
        .events
        .lock()
        .contains(&ClientEvent::UnreadCountsChanged));
    Ok(())
}

#[tokio::test]
async fn test_typing_packets_update_typing_state() -> Result<()> {
    let connection = Arc::new(Connection::default());
    let delegate = RecordingDelegate::default();
    let client = client_with(&connection, store_with_empty_unread_counts(), &delegate);

    client.connection.connect().await?;
    delegate.events.lock().clear();

    connection
        .receive_packet(Packet {
            event: "user-typing".to_string(),
            payload: json!({ "userId": "bob" }),
        })
        .await;
    assert!(client.chat.is_peer_typing(&mock_data::peer_id()));

    connection
        .receive_packet(Packet {
            event: "user-stopped-typing".to_string(),
            payload: json!({ "userId": "bob" }),
        })
        .await;
    assert!(!client.chat.is_peer_typing(&mock_data::peer_id()));

    assert_eq!(
        delegate.events.lock().clone(),
        vec![
            ClientEvent::TypingStateChanged {
                peer: mock_data::peer_id(),
                is_typing: true
            },
            ClientEvent::TypingStateChanged {
                peer: mock_data::peer_id(),
                is_typing: false
            },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_manual_disconnect_silences_stale_events() -> Result<()> {
    let connection = Arc::new(Connection::default());
    let delegate = RecordingDelegate::default();
    let client = client_with(&connection, store_with_empty_unread_counts(), &delegate);

    client.connection.connect().await?;
    client.connection.disconnect().await;
    delegate.events.lock().clear();

    // Events of the torn-down connection must not resurface.
    connection
        .receive_packet(message_packet("m1", "bob", "jane", "Hello"))
        .await;
    connection
        .simulate_disconnect(Some(ConnectionError::TimedOut))
        .await;

    assert_eq!(client.connection_state(), ConnectionState::Idle);
    assert!(delegate.events.lock().is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_transport_drop_triggers_reconnect() -> Result<()> {
    let connection = Arc::new(Connection::default());
    let delegate = RecordingDelegate::default();
    let client = client_with(&connection, store_with_empty_unread_counts(), &delegate);

    client.connection.connect().await?;
    delegate.events.lock().clear();

    connection
        .simulate_disconnect(Some(ConnectionError::TimedOut))
        .await;
    assert_eq!(client.connection_state(), ConnectionState::Disconnected);

    // First reconnect attempt runs after the initial backoff delay.
    tokio::time::sleep(Duration::from_millis(2100)).await;

    assert_eq!(client.connection_state(), ConnectionState::Connected);
    assert_eq!(connection.connect_count(), 2);
    assert_eq!(
        connection.sent_event_names(),
        vec!["user-connected", "user-connected"]
    );

    let events = delegate.events.lock().clone();
    assert!(events.contains(&ClientEvent::ConnectionStatusChanged {
        event: ConnectionEvent::Disconnect {
            error: Some(ConnectionError::TimedOut)
        }
    }));
    assert!(events.contains(&ClientEvent::ConnectionStatusChanged {
        event: ConnectionEvent::Connect
    }));
    Ok(())
}

#[tokio::test]
async fn test_history_and_live_channel_overlap_is_deduplicated() -> Result<()> {
    let connection = Arc::new(Connection::default());
    let delegate = RecordingDelegate::default();

    let mut store = store_with_empty_unread_counts();
    store.expect_load_history().once().return_once(|_| {
        Box::pin(async {
            Ok(vec![parley_core_client::dtos::Message {
                id: MessageId::from("m1"),
                sender: mock_data::peer_id(),
                receiver: mock_data::account_id(),
                body: "Hello".to_string(),
                timestamp: "2025-03-14T12:00:00Z".parse().unwrap(),
                state: parley_core_client::dtos::DeliveryState::Confirmed,
            }])
        })
    });
    store
        .expect_mark_read()
        .once()
        .return_once(|_| Box::pin(async { Ok(()) }));

    let client = client_with(&connection, store, &delegate);
    client.connection.connect().await?;

    client.select_conversation(&mock_data::peer_id()).await?;
    // The same message arrives again through the live channel.
    connection
        .receive_packet(message_packet("m1", "bob", "jane", "Hello"))
        .await;

    assert_eq!(client.chat.messages(&mock_data::peer_id())?.len(), 1);
    assert_eq!(client.unread.count(&mock_data::peer_id()), 0);
    Ok(())
}
