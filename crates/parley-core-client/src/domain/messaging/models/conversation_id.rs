// parley-core-client/parley-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use crate::domain::shared::models::UserId;

/// The unordered pair of users that identifies a one-to-one conversation.
/// Stored normalized so that `(a, b)` and `(b, a)` compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId {
    a: UserId,
    b: UserId,
}

impl ConversationId {
    pub fn new(u1: UserId, u2: UserId) -> Self {
        if u1 <= u2 {
            ConversationId { a: u1, b: u2 }
        } else {
            ConversationId { a: u2, b: u1 }
        }
    }

    pub fn contains(&self, user_id: &UserId) -> bool {
        &self.a == user_id || &self.b == user_id
    }

    /// The other party, from `user_id`'s point of view.
    pub fn peer_of(&self, user_id: &UserId) -> Option<&UserId> {
        if &self.a == user_id {
            Some(&self.b)
        } else if &self.b == user_id {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl Display for ConversationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.a, self.b)
    }
}
