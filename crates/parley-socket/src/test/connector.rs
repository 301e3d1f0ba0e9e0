// parley-core-client/parley-socket
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::Secret;

use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};
use crate::packet::Packet;

/// Scripted in-memory transport for tests. Records outbound packets and
/// lets tests inject inbound events through the registered handler.
pub struct Connector {
    connection: Arc<Connection>,
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        _user_id: &str,
        _token: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        let failures_left = self.connection.inner.fail_next_connects.load(Ordering::SeqCst);
        if failures_left > 0 {
            self.connection
                .inner
                .fail_next_connects
                .store(failures_left - 1, Ordering::SeqCst);
            return Err(ConnectionError::Generic {
                msg: "scripted connect failure".to_string(),
            });
        }

        self.connection.inner.connect_count.fetch_add(1, Ordering::SeqCst);
        *self.connection.inner.event_handler.lock() = Some(event_handler);
        Ok(Box::new(self.connection.clone()))
    }
}

#[derive(Default, Clone)]
pub struct Connection {
    inner: Arc<ConnectionInner>,
}

#[derive(Default)]
struct ConnectionInner {
    sent_packets: Mutex<Vec<Packet>>,
    event_handler: Mutex<Option<ConnectionEventHandler>>,
    connect_count: AtomicU32,
    fail_next_connects: AtomicU32,
}

impl Connection {
    pub fn connector(self: &Arc<Self>) -> Box<dyn ConnectorTrait> {
        Box::new(Connector {
            connection: self.clone(),
        })
    }

    pub fn sent_packets(&self) -> Vec<Packet> {
        self.inner.sent_packets.lock().clone()
    }

    pub fn sent_event_names(&self) -> Vec<String> {
        self.inner
            .sent_packets
            .lock()
            .iter()
            .map(|packet| packet.event.clone())
            .collect()
    }

    pub fn connect_count(&self) -> u32 {
        self.inner.connect_count.load(Ordering::SeqCst)
    }

    /// Makes the next `count` connect attempts fail.
    pub fn fail_next_connects(&self, count: u32) {
        self.inner.fail_next_connects.store(count, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.inner.sent_packets.lock().clear()
    }

    pub async fn receive_packet(&self, packet: Packet) {
        self.receive(ConnectionEvent::Packet(packet)).await
    }

    pub async fn simulate_disconnect(&self, error: Option<ConnectionError>) {
        self.receive(ConnectionEvent::Disconnected { error }).await
    }

    async fn receive(&self, event: ConnectionEvent) {
        let fut = {
            let guard = self.inner.event_handler.lock();
            let Some(handler) = guard.as_ref() else {
                return;
            };
            (handler)(Box::new(self.clone()), event)
        };
        fut.await
    }
}

impl ConnectionTrait for Connection {
    fn send_packet(&self, packet: Packet) -> Result<()> {
        self.inner.sent_packets.lock().push(packet);
        Ok(())
    }

    fn disconnect(&self) {}
}

impl ConnectionTrait for Arc<Connection> {
    fn send_packet(&self, packet: Packet) -> Result<()> {
        self.as_ref().send_packet(packet)
    }

    fn disconnect(&self) {
        self.as_ref().disconnect()
    }
}
