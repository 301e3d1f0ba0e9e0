// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::domain::presence::repos::TypingStateRepository;
use crate::domain::shared::models::UserId;

type ExpiryHandler = Box<dyn Fn(UserId) + Send + Sync>;

/// Typing flags backed by one expiry timer per peer. A flag that is not
/// refreshed within the timeout disappears on its own, so a peer whose
/// stop signal got lost does not stay "typing" forever.
#[derive(Clone)]
pub struct TypingStateRegistry {
    inner: Arc<RegistryInner>,
}

struct RegistryInner {
    timeout: Duration,
    entries: Mutex<HashMap<UserId, TypingEntry>>,
    generations: AtomicU64,
    on_expiry: OnceLock<ExpiryHandler>,
}

struct TypingEntry {
    generation: u64,
    timer: JoinHandle<()>,
}

impl TypingStateRegistry {
    pub fn new(timeout: Duration) -> Self {
        TypingStateRegistry {
            inner: Arc::new(RegistryInner {
                timeout,
                entries: Mutex::new(HashMap::new()),
                generations: AtomicU64::new(0),
                on_expiry: OnceLock::new(),
            }),
        }
    }

    /// Registers the callback to run when a flag times out. Must be called
    /// exactly once, before the registry receives events.
    pub fn set_expiry_handler(&self, handler: impl Fn(UserId) + Send + Sync + 'static) {
        if self.inner.on_expiry.set(Box::new(handler)).is_err() {
            panic!("Tried to set the expiry handler twice.");
        }
    }
}

impl TypingStateRepository for TypingStateRegistry {
    fn set_typing(&self, peer: &UserId) {
        let generation = self.inner.generations.fetch_add(1, Ordering::SeqCst);
        let timer = spawn_expiry_timer(&self.inner, peer.clone(), generation);

        let mut entries = self.inner.entries.lock();
        if let Some(old) = entries.insert(peer.clone(), TypingEntry { generation, timer }) {
            old.timer.abort();
        }
    }

    fn clear_typing(&self, peer: &UserId) {
        let mut entries = self.inner.entries.lock();
        if let Some(entry) = entries.remove(peer) {
            entry.timer.abort();
        }
    }

    fn is_typing(&self, peer: &UserId) -> bool {
        self.inner.entries.lock().contains_key(peer)
    }

    fn typing_peers(&self) -> Vec<UserId> {
        self.inner.entries.lock().keys().cloned().collect()
    }

    fn reset(&self) {
        let mut entries = self.inner.entries.lock();
        for (_, entry) in entries.drain() {
            entry.timer.abort();
        }
    }
}

fn spawn_expiry_timer(inner: &Arc<RegistryInner>, peer: UserId, generation: u64) -> JoinHandle<()> {
    let timeout = inner.timeout;
    let weak_inner = Arc::downgrade(inner);

    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;

        let Some(inner) = weak_inner.upgrade() else {
            return;
        };

        {
            let mut entries = inner.entries.lock();
            // A refreshed flag has a newer timer owning the entry.
            match entries.get(&peer) {
                Some(entry) if entry.generation == generation => (),
                Some(_) | None => return,
            }
            entries.remove(&peer);
        }

        if let Some(on_expiry) = inner.on_expiry.get() {
            on_expiry(peer);
        }
    })
}
