// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use crate::domain::shared::models::UserId;

/// Per-peer unread message counts plus their sum, as reported by the
/// server or maintained locally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnreadCounts {
    pub per_peer: HashMap<UserId, u32>,
    pub total: u32,
}

impl UnreadCounts {
    pub fn new(per_peer: HashMap<UserId, u32>) -> Self {
        let total = per_peer.values().sum();
        UnreadCounts { per_peer, total }
    }
}
