// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::connection::models::{ConnectionProperties, ReconnectPolicy};
use crate::domain::shared::models::{ConnectionState, UserId};

pub struct AppConfig {
    pub reconnect: ReconnectPolicy,
    /// How long a peer's typing flag survives without being refreshed.
    pub typing_timeout: Duration,
    /// How long after the last keystroke we report the user as paused.
    pub compose_pause_after: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reconnect: ReconnectPolicy::default(),
            typing_timeout: Duration::from_secs(3),
            compose_pause_after: Duration::from_secs(1),
        }
    }
}

pub struct AppContext {
    pub connection_state: RwLock<ConnectionState>,
    pub connection_properties: RwLock<Option<ConnectionProperties>>,
    /// Bumped on every connect and disconnect. Async work captures the
    /// epoch when it starts and bails if a newer one exists when it
    /// resumes.
    pub connection_epoch: AtomicU64,
    pub selected_conversation: RwLock<Option<SelectedConversation>>,
    pub selection_counter: AtomicU64,
    pub config: AppConfig,
}

pub struct SelectedConversation {
    pub peer: UserId,
    pub generation: u64,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            connection_state: Default::default(),
            connection_properties: Default::default(),
            connection_epoch: Default::default(),
            selected_conversation: Default::default(),
            selection_counter: Default::default(),
            config,
        }
    }
}

impl AppContext {
    pub fn current_user_id(&self) -> Result<UserId> {
        self.connection_properties
            .read()
            .as_ref()
            .map(|p| p.connected_user_id.clone())
            .ok_or(anyhow::anyhow!(
                "Failed to read the user's id since the client is not connected."
            ))
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state.read().clone()
    }

    pub fn set_connection_state(&self, state: ConnectionState) {
        *self.connection_state.write() = state;
    }

    pub fn set_connection_properties(&self, properties: ConnectionProperties) {
        self.connection_properties.write().replace(properties);
    }

    pub fn reset_connection_properties(&self) {
        self.connection_properties.write().take();
    }

    pub fn connection_epoch(&self) -> u64 {
        self.connection_epoch.load(Ordering::SeqCst)
    }

    pub fn bump_connection_epoch(&self) -> u64 {
        self.connection_epoch.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl AppContext {
    /// Marks `peer` as the selected conversation and returns the selection
    /// generation that in-flight work should validate against.
    pub fn select_conversation(&self, peer: &UserId) -> u64 {
        let generation = self.selection_counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.selected_conversation
            .write()
            .replace(SelectedConversation {
                peer: peer.clone(),
                generation,
            });
        generation
    }

    pub fn deselect_conversation(&self) {
        self.selected_conversation.write().take();
    }

    pub fn selected_peer(&self) -> Option<UserId> {
        self.selected_conversation
            .read()
            .as_ref()
            .map(|s| s.peer.clone())
    }

    pub fn selection_is_current(&self, peer: &UserId, generation: u64) -> bool {
        self.selected_conversation
            .read()
            .as_ref()
            .map(|s| &s.peer == peer && s.generation == generation)
            .unwrap_or(false)
    }
}
