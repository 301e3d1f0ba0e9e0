// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::warn;

use crate::domain::shared::models::UserId;
use crate::domain::unread::models::UnreadCounts;
use crate::domain::unread::repos::UnreadCountsRepository;

/// Unread counts with a running total, so `total()` never needs to walk
/// the per-peer map.
#[derive(Default)]
pub struct InMemoryUnreadCountsRepository {
    ledger: RwLock<Ledger>,
}

#[derive(Default)]
struct Ledger {
    per_peer: HashMap<UserId, u32>,
    total: u32,
}

impl UnreadCountsRepository for InMemoryUnreadCountsRepository {
    fn replace_all(&self, counts: UnreadCounts) {
        let total = counts.per_peer.values().sum::<u32>();
        if total != counts.total {
            warn!(
                reported = counts.total,
                computed = total,
                "Unread total does not match the sum of the per-peer counts"
            );
        }

        let mut ledger = self.ledger.write();
        ledger.per_peer = counts.per_peer;
        ledger.total = total;
    }

    fn increment(&self, peer: &UserId) -> u32 {
        let mut ledger = self.ledger.write();
        let count = ledger.per_peer.entry(peer.clone()).or_insert(0);
        *count += 1;
        let count = *count;
        ledger.total += 1;
        count
    }

    fn clear(&self, peer: &UserId) -> u32 {
        let mut ledger = self.ledger.write();
        let Some(count) = ledger.per_peer.remove(peer) else {
            return 0;
        };
        ledger.total -= count;
        count
    }

    fn get(&self, peer: &UserId) -> u32 {
        self.ledger.read().per_peer.get(peer).copied().unwrap_or(0)
    }

    fn total(&self) -> u32 {
        self.ledger.read().total
    }

    fn counts(&self) -> UnreadCounts {
        let ledger = self.ledger.read();
        UnreadCounts {
            per_peer: ledger.per_peer.clone(),
            total: ledger.total,
        }
    }

    fn reset(&self) {
        let mut ledger = self.ledger.write();
        ledger.per_peer.clear();
        ledger.total = 0;
    }
}
